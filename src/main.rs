use iced::widget::image::Handle;
use iced::widget::{canvas, column, scrollable, stack, text};
use iced::{Alignment, Element, Length, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};

mod config;
mod error;
mod photos;
mod state;
mod ui;

use config::PortfolioConfig;
use state::gallery::{GalleryController, RevealOutcome};
use state::layout::{BackdropLayout, PageMetrics};
use state::slideshow::{Slideshow, SwapRequest};
use state::starfield::StarField;
use state::tilt::{CardId, TiltController};

/// Redraw cadence of the starfield canvas (~30 fps)
const ANIMATION_FRAME: Duration = Duration::from_millis(33);

/// Window size assumed until the first resize event arrives
const DEFAULT_WINDOW: Size = Size::new(1280.0, 800.0);

/// The backdrop never shrinks below this
const MIN_BACKDROP_HEIGHT: f32 = 600.0;

/// Rough vertical extents of the fixed page sections, used to estimate
/// content height for the backdrop synchronizer
const HEADER_HEIGHT: f32 = 120.0;
const TRIGGER_HEIGHT: f32 = 80.0;
const PAGE_PADDING: f32 = 160.0;

/// Main application state
struct Portfolio {
    config: PortfolioConfig,
    rng: fastrand::Rng,
    /// Generated once at startup, sampled by the canvas every frame
    starfield: StarField,
    tilt: TiltController,
    gallery: GalleryController,
    slideshow: Slideshow,
    backdrop: BackdropLayout,
    /// Loaded photo per slideshow cell
    slide_handles: Vec<Option<Handle>>,
    /// Loaded photo per gallery card
    card_handles: HashMap<CardId, Handle>,
    window: Size,
    started_at: Instant,
    /// Seconds since startup, advanced by the animation tick
    elapsed: f32,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The shared slideshow clock fired: every cell starts fading out
    CycleTick,
    /// A cell's swap delay elapsed; carries the cycle it belongs to
    SwapDue { cell: usize, cycle: u64 },
    /// A slideshow photo finished loading (or failed with `None`)
    PhotoLoaded {
        cell: usize,
        cycle: u64,
        handle: Option<Handle>,
    },
    /// A cell's fade-in transition completed
    FadeInDone { cell: usize, cycle: u64 },
    /// A gallery card photo finished loading (or failed with `None`)
    CardPhotoLoaded { card: CardId, handle: Option<Handle> },
    /// Pointer moved within a card, coordinates relative to its corner
    CardMoved { card: CardId, x: f32, y: f32 },
    /// Pointer left a card
    CardLeft { card: CardId },
    /// The gallery trigger was activated
    ShowMorePressed,
    /// The window changed size
    WindowResized(Size),
    /// Starfield redraw tick
    Animate(Instant),
}

impl Portfolio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = PortfolioConfig::load_or_default(Path::new("portfolio.json"));
        let mut rng = fastrand::Rng::new();

        let starfield = StarField::generate(&config.star_layers, &mut rng);
        let mut tilt = TiltController::new(config.max_tilt_deg, config.perspective_px);
        let gallery = GalleryController::new(config.gallery_rows, config.max_visible_rows);
        let mut slideshow = Slideshow::new(config.catalog(), config.slideshow_cells);
        let slide_handles = vec![None; config.slideshow_cells];

        // The first gallery row is visible from the start: wire up its
        // tilt handling and begin fetching its photos.
        tilt.attach((0..config.cards_per_row).map(|col| (0, col)));
        let card_task = load_row_photos(&config, 0);

        // The initial slideshow cycle runs immediately, without waiting
        // for the first timer tick.
        let swap_task = schedule_swaps(slideshow.begin_cycle(&mut rng), config.swap_delay());

        println!(
            "🌌 Nebula portfolio ready: {} stars, {} photos in catalog",
            starfield.star_count(),
            config.catalog_size,
        );

        let mut portfolio = Portfolio {
            config,
            rng,
            starfield,
            tilt,
            gallery,
            slideshow,
            backdrop: BackdropLayout::new(),
            slide_handles,
            card_handles: HashMap::new(),
            window: DEFAULT_WINDOW,
            started_at: Instant::now(),
            elapsed: 0.0,
            status: String::from("Welcome"),
        };
        portfolio.sync_backdrop();

        (portfolio, Task::batch([card_task, swap_task]))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CycleTick => {
                let requests = self.slideshow.begin_cycle(&mut self.rng);
                schedule_swaps(requests, self.config.swap_delay())
            }

            Message::SwapDue { cell, cycle } => {
                match self.slideshow.swap_due(cell, cycle) {
                    Some(name) => {
                        let path = self.config.photo_path(name);
                        Task::perform(photos::fetch(path), move |handle| Message::PhotoLoaded {
                            cell,
                            cycle,
                            handle,
                        })
                    }
                    // Stale cycle or unknown cell: discarded
                    None => Task::none(),
                }
            }

            Message::PhotoLoaded { cell, cycle, handle } => match handle {
                Some(handle) => {
                    if self.slideshow.photo_loaded(cell, cycle) {
                        if let Some(slot) = self.slide_handles.get_mut(cell) {
                            *slot = Some(handle);
                        }
                        let fade = self.config.fade();
                        return Task::perform(
                            async move { tokio::time::sleep(fade).await },
                            move |_| Message::FadeInDone { cell, cycle },
                        );
                    }
                    Task::none()
                }
                None => {
                    // The cell stays blacked out until the next cycle.
                    self.slideshow.photo_failed(cell, cycle);
                    Task::none()
                }
            },

            Message::FadeInDone { cell, cycle } => {
                self.slideshow.settled(cell, cycle);
                Task::none()
            }

            Message::CardPhotoLoaded { card, handle } => {
                if let Some(handle) = handle {
                    self.card_handles.insert(card, handle);
                }
                Task::none()
            }

            Message::CardMoved { card, x, y } => {
                self.tilt
                    .pointer_moved(card, x, y, ui::gallery::CARD_WIDTH, ui::gallery::CARD_HEIGHT);
                Task::none()
            }

            Message::CardLeft { card } => {
                self.tilt.pointer_left(card);
                Task::none()
            }

            Message::ShowMorePressed => match self.gallery.reveal_next() {
                RevealOutcome::Revealed { row, now_full } => {
                    let cols = self.config.cards_per_row;
                    self.tilt.attach((0..cols).map(move |col| (row, col)));
                    self.sync_backdrop();
                    self.status = if now_full {
                        String::from("Gallery fully revealed")
                    } else {
                        format!("Revealed row {} of {}", row + 1, self.gallery.total_rows())
                    };
                    load_row_photos(&self.config, row)
                }
                RevealOutcome::OpenExternal => {
                    open_external(&self.config.portfolio_url);
                    Task::none()
                }
                RevealOutcome::Skipped => {
                    eprintln!(
                        "⚠️  No gallery row left to reveal (gallery_rows = {}, max_visible_rows = {})",
                        self.config.gallery_rows, self.config.max_visible_rows,
                    );
                    Task::none()
                }
            },

            Message::WindowResized(size) => {
                self.window = size;
                self.sync_backdrop();
                Task::none()
            }

            Message::Animate(now) => {
                self.elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("Jan Prein Photography").size(42),
            text("a nebula of moments").size(16),
        ]
        .spacing(6)
        .align_x(Alignment::Center);

        let content = column![
            header,
            ui::slideshow::view(&self.slideshow, &self.slide_handles),
            ui::gallery::view(&self.gallery, &self.tilt, &self.card_handles, &self.config),
            text(&self.status).size(14),
        ]
        .spacing(30)
        .padding(40)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        let backdrop = canvas(ui::starfield::Backdrop {
            field: &self.starfield,
            elapsed: self.elapsed,
        })
        .width(Length::Fill)
        .height(Length::Fixed(self.backdrop.height()));

        scrollable(stack![backdrop, content].width(Length::Fill)).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            iced::time::every(self.config.cycle_interval()).map(|_| Message::CycleTick),
            iced::time::every(ANIMATION_FRAME).map(Message::Animate),
            iced::event::listen_with(window_event),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Recompute the backdrop height so the starfield covers the whole
    /// scrollable page; called at startup, on resize and after reveals
    fn sync_backdrop(&mut self) {
        self.backdrop.sync(PageMetrics {
            viewport_height: self.window.height,
            content_height: self.content_height(),
            min_height: MIN_BACKDROP_HEIGHT,
        });
    }

    /// Estimated height of the laid-out page content
    fn content_height(&self) -> f32 {
        let rows = self.gallery.visible_rows() as f32;
        HEADER_HEIGHT
            + ui::slideshow::CELL_SIZE
            + rows * ui::gallery::ROW_HEIGHT
            + TRIGGER_HEIGHT
            + PAGE_PADDING
    }
}

fn main() -> iced::Result {
    iced::application("Nebula Portfolio", Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .centered()
        .run_with(Portfolio::new)
}

fn window_event(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    }
}

/// Begin fetching the photos of one gallery row. Cards map onto the
/// catalog in reading order, wrapping when the gallery outgrows it.
fn load_row_photos(config: &PortfolioConfig, row: usize) -> Task<Message> {
    let catalog = config.catalog();
    if catalog.is_empty() {
        return Task::none();
    }

    Task::batch((0..config.cards_per_row).map(|col| {
        let name = &catalog[(row * config.cards_per_row + col) % catalog.len()];
        let path = config.photo_path(name);
        let card = (row, col);
        Task::perform(photos::fetch(path), move |handle| Message::CardPhotoLoaded {
            card,
            handle,
        })
    }))
}

/// Deliver one swap request per cell after the configured delay
fn schedule_swaps(requests: Vec<SwapRequest>, delay: Duration) -> Task<Message> {
    Task::batch(requests.into_iter().map(move |request| {
        Task::perform(
            async move {
                tokio::time::sleep(delay).await;
                request
            },
            |request| Message::SwapDue {
                cell: request.cell,
                cycle: request.cycle,
            },
        )
    }))
}

/// Open the external portfolio in the platform's default browser.
/// Spawn-and-forget; a failure only costs the navigation.
fn open_external(url: &str) {
    let result = if cfg!(target_os = "macos") {
        Command::new("open").arg(url).spawn()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", url]).spawn()
    } else {
        Command::new("xdg-open").arg(url).spawn()
    };

    match result {
        Ok(_) => println!("🌐 Opening {url}"),
        Err(e) => eprintln!("⚠️  Could not open {url}: {e}"),
    }
}
