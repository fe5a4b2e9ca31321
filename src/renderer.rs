use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH, STAR_COUNT, WINDOW_TITLE};
use crate::entities::{Bullet, Enemy, GameState, Player};
use crate::game::Game;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{Canvas, Context, Line as CanvasLine, Points},
    },
};

/// Terminal cells are about twice as tall as they are wide, so a 4:3 playfield
/// needs roughly 8 columns for every 3 rows.
const ASPECT_COLS: u32 = 8;
const ASPECT_ROWS: u32 = 3;

/// Spacing of the scanlines used to fill solid shapes, in world units
const FILL_STEP: f64 = 2.0;

const PLAYER_COLOR: Color = Color::Blue;
const ENEMY_COLOR: Color = Color::Rgb(147, 0, 211);
const SCORE_BACKGROUND: Color = Color::Rgb(40, 40, 40);

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub player: &'a Player,
    pub bullets: &'a [Bullet],
    pub enemies: &'a [Enemy],
    pub score: u32,
    pub high_score: u32,
    pub wave: u32,
    pub area: Rect,
}

impl<'a> RenderView<'a> {
    pub fn new(game: &'a Game, area: Rect) -> Self {
        Self {
            game_state: game.state(),
            player: &game.player,
            bullets: &game.bullets,
            enemies: &game.enemies,
            score: game.score(),
            high_score: game.high_score(),
            wave: game.wave(),
            area,
        }
    }
}

/// Handles all rendering responsibilities for the game
#[derive(Debug, Default)]
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let playfield = fit_playfield(view.area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {WINDOW_TITLE} "))
            .title_alignment(Alignment::Center);
        let inner = block.inner(playfield);
        frame.render_widget(block, playfield);

        match view.game_state {
            GameState::Menu => {
                self.render_world(frame, view, inner, false);
                self.render_menu(frame, view, inner);
            }
            GameState::Playing => {
                self.render_world(frame, view, inner, true);
                self.render_hud(frame, view, inner);
            }
            GameState::GameOver => {
                self.render_world(frame, view, inner, true);
                self.render_hud(frame, view, inner);
                self.render_game_over(frame, view, inner);
            }
        }
    }

    /// Draws the starfield and, when asked, every entity in world coordinates
    fn render_world(&self, frame: &mut Frame, view: &RenderView, area: Rect, entities: bool) {
        let mut rng = rand::rng();
        let stars: Vec<(f64, f64)> = (0..STAR_COUNT)
            .map(|_| {
                (
                    rng.random_range(0.0..SCREEN_WIDTH as f64),
                    rng.random_range(0.0..SCREEN_HEIGHT as f64),
                )
            })
            .collect();

        let canvas = Canvas::default()
            .background_color(Color::Black)
            .marker(Marker::Braille)
            .x_bounds([0.0, SCREEN_WIDTH as f64])
            .y_bounds([0.0, SCREEN_HEIGHT as f64])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &stars,
                    color: Color::White,
                });

                if !entities {
                    return;
                }

                ctx.layer();
                draw_player(ctx, view.player);
                for bullet in view.bullets {
                    draw_bullet(ctx, bullet);
                }
                for enemy in view.enemies {
                    draw_enemy(ctx, enemy);
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_hud(&self, frame: &mut Frame, view: &RenderView, area: Rect) {
        let score = Line::from(vec![
            Span::styled(
                format!(" Score: {} ", view.score),
                Style::default()
                    .fg(Color::White)
                    .bg(SCORE_BACKGROUND)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  High: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.high_score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Wave: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.wave),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]);

        let score_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height.min(1),
        };
        frame.render_widget(Paragraph::new(score), score_area);

        let controls = Line::from(Span::styled(
            "[←/→: Move] [Space: Fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        ));
        let controls_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: area.height.min(1),
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    fn render_menu(&self, frame: &mut Frame, view: &RenderView, area: Rect) {
        let menu_text = vec![
            Line::from("SPACE INVADERS").centered().green().bold(),
            Line::from(""),
            Line::from(""),
            Line::from("Press SPACE to Start").centered().white(),
            Line::from(""),
            Line::from(format!("High Score: {}", view.high_score))
                .centered()
                .white(),
        ];

        // Title sits a third of the way down the playfield
        let top = area.y + area.height / 3;
        let menu_area = Rect {
            x: area.x,
            y: top,
            width: area.width,
            height: (area.y + area.height).saturating_sub(top),
        };

        frame.render_widget(
            Paragraph::new(menu_text).alignment(Alignment::Center),
            menu_area,
        );
    }

    fn render_game_over(&self, frame: &mut Frame, view: &RenderView, area: Rect) {
        let game_over_text = vec![
            Line::from(""),
            Line::from("GAME OVER").centered().red().bold(),
            Line::from(""),
            Line::from("Press SPACE to Restart").centered().white(),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .white(),
        ];

        let overlay = centered_rect(34, 7, area);
        frame.render_widget(Clear, overlay);
        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                )
                .style(Style::default().bg(Color::Black))
                .alignment(Alignment::Center),
            overlay,
        );
    }
}

/// Largest rectangle with the playfield's aspect ratio, centred in `area`
pub fn fit_playfield(area: Rect) -> Rect {
    let (cols, rows) = (area.width as u32, area.height as u32);
    let (width, height) = if cols * ASPECT_ROWS > rows * ASPECT_COLS {
        ((rows * ASPECT_COLS / ASPECT_ROWS) as u16, area.height)
    } else {
        (area.width, (cols * ASPECT_ROWS / ASPECT_COLS) as u16)
    };

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit if needed
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Canvas y grows upward, the world's grows downward
fn flip_y(y: f64) -> f64 {
    SCREEN_HEIGHT as f64 - y
}

/// Fills a world-space rectangle with horizontal scanlines
fn fill_rect(ctx: &mut Context, x: i32, y: i32, width: i32, height: i32, color: Color) {
    let (x1, x2) = (x as f64, (x + width) as f64);
    let mut row = y as f64;
    let bottom = (y + height) as f64;
    while row <= bottom {
        let cy = flip_y(row);
        ctx.draw(&CanvasLine::new(x1, cy, x2, cy, color));
        row += FILL_STEP;
    }
}

fn draw_player(ctx: &mut Context, player: &Player) {
    let (x, y) = (player.x, player.y);
    let (w, h) = (player.get_width(), player.get_height());

    // Hull
    fill_rect(ctx, x, y + 10, w, h - 10, PLAYER_COLOR);

    // Nose cone: fan of lines from the tip down to the top of the hull
    let tip = ((x + w / 2) as f64, flip_y(y as f64));
    let base_y = flip_y((y + 10) as f64);
    let mut base_x = x as f64;
    while base_x <= (x + w) as f64 {
        ctx.draw(&CanvasLine::new(tip.0, tip.1, base_x, base_y, PLAYER_COLOR));
        base_x += FILL_STEP;
    }

    // Centre stripe
    fill_rect(ctx, x + w / 2 - 2, y + 5, 4, h - 5, Color::White);
}

fn draw_bullet(ctx: &mut Context, bullet: &Bullet) {
    let (w, h) = (bullet.get_width(), bullet.get_height());
    // Glow first, core on top
    fill_rect(ctx, bullet.x - 1, bullet.y, w + 2, h, Color::White);
    fill_rect(ctx, bullet.x, bullet.y, w, h, Color::Blue);
}

fn draw_enemy(ctx: &mut Context, enemy: &Enemy) {
    let (x, y) = (enemy.x, enemy.y);
    let (w, h) = (enemy.get_width(), enemy.get_height());

    if enemy.is_alternate_pose() {
        fill_rect(ctx, x + 5, y + 5, w - 10, h - 10, ENEMY_COLOR);
        fill_rect(ctx, x, y + 15, w, 10, ENEMY_COLOR);
    } else {
        fill_rect(ctx, x, y + 5, w, h - 10, ENEMY_COLOR);
        fill_rect(ctx, x + 10, y, w - 20, h, ENEMY_COLOR);
    }
}
