use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use common::api::{CheckoutResponse, EarnResponse, PlayerProfile};
use common::{Cart, GameEngine, HighScoreStore, EXTRA_LIFE_PRICE};

use crate::api::{load_cart_or_empty, load_profile_or_default, ApiClient, ApiError, ExtraLifePurchase};
use crate::views::{GameOverState, GameViewState, MenuState, StoreState, View};

const NOTICE_DURATION: Duration = Duration::from_millis(2500);
const CART_NOT_EMPTY: &str = "Check out your cart in the store first";

pub type Engine = GameEngine<Box<dyn HighScoreStore>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
    ShowMenu,
    StartGame { initial_lives: Option<u32> },
    GameOver { score: u32, high_score: u32, new_record: bool },
    OpenStore,
    BuyExtraLife,
    AddToCart { item_id: String, price: u32 },
    Equip(String),
    SetQuantity { line_id: String, quantity: u32 },
    RemoveFromCart(String),
    Checkout,
}

/// Results of backend calls made off the UI loop.
#[derive(Debug)]
pub enum Background {
    ProfileLoaded { profile: PlayerProfile, initial: bool },
    CoinsReported { run_id: u64, result: Result<EarnResponse, ApiError> },
    CartLoaded(Cart),
    CartChanged { result: Result<Cart, ApiError>, success: &'static str, failure: &'static str },
    CheckedOut(Result<CheckoutResponse, ApiError>),
    ExtraLifeBought(Result<ExtraLifePurchase, ApiError>),
    Equipped { skin_id: String, result: Result<(), ApiError> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Short-lived message shown at the bottom of every screen.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    shown_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= NOTICE_DURATION
    }
}

/// State shared by every screen.
pub struct AppContext {
    pub engine: Engine,
    pub profile: PlayerProfile,
    pub cart: Cart,
    pub notice: Option<Notice>,
    pub online: bool,
}

impl AppContext {
    pub fn notify(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.notice = Some(Notice::new(text, kind));
    }

    pub fn can_buy_extra_life(&self) -> bool {
        self.online && self.profile.balance >= EXTRA_LIFE_PRICE
    }
}

pub enum AppState {
    Menu(Box<MenuState>),
    Game(Box<GameViewState>),
    GameOver(Box<GameOverState>),
    Store(Box<StoreState>),
}

pub struct App {
    pub state: AppState,
    pub ctx: AppContext,
    api: Option<ApiClient>,
    tx: UnboundedSender<Background>,
    run_id: u64,
}

impl App {
    pub fn new(engine: Engine, api: Option<ApiClient>, tx: UnboundedSender<Background>) -> Self {
        let app = Self {
            state: AppState::Menu(Box::new(MenuState::new())),
            ctx: AppContext {
                engine,
                profile: PlayerProfile::offline(),
                cart: Cart::default(),
                notice: None,
                online: api.is_some(),
            },
            api,
            tx,
            run_id: 0,
        };
        if let Some(api) = app.api.clone() {
            app.spawn(async move {
                let profile = load_profile_or_default(&api).await;
                Background::ProfileLoaded { profile, initial: true }
            });
        }
        app
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match &mut self.state {
            AppState::Menu(view) => view.handle_input(key, &mut self.ctx),
            AppState::Game(view) => view.handle_input(key, &mut self.ctx),
            AppState::GameOver(view) => view.handle_input(key, &mut self.ctx),
            AppState::Store(view) => view.handle_input(key, &mut self.ctx),
        }
    }

    pub fn update(&mut self, dt: Duration) -> Option<AppCommand> {
        if self.ctx.notice.as_ref().is_some_and(Notice::expired) {
            self.ctx.notice = None;
        }
        match &mut self.state {
            AppState::Menu(view) => view.update(dt, &mut self.ctx),
            AppState::Game(view) => view.update(dt, &mut self.ctx),
            AppState::GameOver(view) => view.update(dt, &mut self.ctx),
            AppState::Store(view) => view.update(dt, &mut self.ctx),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        match &self.state {
            AppState::Menu(view) => view.render(frame, &self.ctx),
            AppState::Game(view) => view.render(frame, &self.ctx),
            AppState::GameOver(view) => view.render(frame, &self.ctx),
            AppState::Store(view) => view.render(frame, &self.ctx),
        }
        if let Some(notice) = &self.ctx.notice {
            render_notice(frame, notice);
        }
    }

    pub fn handle_command(&mut self, command: AppCommand) -> Result<()> {
        match command {
            AppCommand::ShowMenu => {
                self.state = AppState::Menu(Box::new(MenuState::new()));
            }
            AppCommand::StartGame { initial_lives } => {
                self.ctx.engine.start(initial_lives);
                self.state = AppState::Game(Box::new(GameViewState::new()));
            }
            AppCommand::GameOver { score, high_score, new_record } => {
                self.run_id += 1;
                let run_id = self.run_id;
                self.state = AppState::GameOver(Box::new(GameOverState::new(
                    run_id, score, high_score, new_record,
                )));
                if let Some(api) = self.api.clone() {
                    self.spawn(async move {
                        let result = api.earn(score).await;
                        Background::CoinsReported { run_id, result }
                    });
                }
            }
            AppCommand::OpenStore => {
                let Some(api) = self.api.clone() else {
                    self.ctx.notify("Store is offline", NoticeKind::Error);
                    return Ok(());
                };
                self.state = AppState::Store(Box::new(StoreState::new()));
                self.spawn(async move { Background::CartLoaded(load_cart_or_empty(&api).await) });
            }
            AppCommand::BuyExtraLife => {
                if !self.ctx.can_buy_extra_life() {
                    self.ctx.notify("Not enough coins", NoticeKind::Error);
                    return Ok(());
                }
                if !self.ctx.cart.is_empty() {
                    self.ctx.notify(CART_NOT_EMPTY, NoticeKind::Error);
                    return Ok(());
                }
                if let Some(api) = self.api.clone() {
                    self.spawn(async move { Background::ExtraLifeBought(api.buy_extra_life().await) });
                }
            }
            AppCommand::AddToCart { item_id, price } => {
                if self.ctx.profile.balance < price {
                    self.ctx.notify("Not enough coins", NoticeKind::Error);
                    return Ok(());
                }
                if let Some(api) = self.api.clone() {
                    self.spawn(async move {
                        let result = api.add_to_cart(&item_id).await;
                        Background::CartChanged { result, success: "Added to cart", failure: "Could not add to cart" }
                    });
                }
            }
            AppCommand::SetQuantity { line_id, quantity } => {
                if let Some(api) = self.api.clone() {
                    self.spawn(async move {
                        let result = api.update_quantity(&line_id, quantity).await;
                        Background::CartChanged { result, success: "Cart updated", failure: "Could not update quantity" }
                    });
                }
            }
            AppCommand::RemoveFromCart(line_id) => {
                if let Some(api) = self.api.clone() {
                    self.spawn(async move {
                        let result = api.remove_from_cart(&line_id).await;
                        Background::CartChanged { result, success: "Removed from cart", failure: "Could not remove" }
                    });
                }
            }
            AppCommand::Checkout => {
                if let Err(refusal) = self.ctx.cart.can_checkout(self.ctx.profile.balance) {
                    self.ctx.notify(refusal.to_string(), NoticeKind::Error);
                    return Ok(());
                }
                if let Some(api) = self.api.clone() {
                    self.spawn(async move {
                        Background::CheckedOut(api.checkout().await)
                    });
                }
            }
            AppCommand::Equip(skin_id) => {
                if let Some(api) = self.api.clone() {
                    self.spawn(async move {
                        let result = api.equip(&skin_id).await;
                        Background::Equipped { skin_id, result }
                    });
                }
            }
            AppCommand::Quit => {
                // Handled in main loop
            }
        }
        Ok(())
    }

    pub fn handle_background(&mut self, message: Background) {
        match message {
            Background::ProfileLoaded { profile, initial } => {
                if initial {
                    self.ctx.engine.set_bonus_lives(profile.extra_lives);
                }
                self.ctx.profile = profile;
            }
            Background::CoinsReported { run_id, result } => match result {
                Ok(earned) => {
                    info!("Run {} earned {} coins", run_id, earned.earned);
                    if let Some(balance) = earned.balance {
                        self.ctx.profile.balance = balance;
                    }
                    if let AppState::GameOver(view) = &mut self.state {
                        if view.run_id() == run_id {
                            view.set_coins_earned(earned.earned);
                        }
                    }
                }
                Err(e) => warn!("Failed to report score for run {}: {}", run_id, e),
            },
            Background::CartLoaded(cart) => {
                self.ctx.cart = cart;
                if let AppState::Store(view) = &mut self.state {
                    view.clamp_selection(&self.ctx.cart);
                }
            }
            Background::CartChanged { result, success, failure } => match result {
                Ok(cart) => {
                    self.ctx.cart = cart;
                    if let AppState::Store(view) = &mut self.state {
                        view.clamp_selection(&self.ctx.cart);
                    }
                    self.ctx.notify(success, NoticeKind::Success);
                }
                Err(e) => {
                    warn!("{}: {}", failure, e);
                    self.ctx.notify(e.user_message(failure), NoticeKind::Error);
                }
            },
            Background::CheckedOut(result) => self.apply_checkout(result, false),
            Background::ExtraLifeBought(result) => match result {
                Ok(ExtraLifePurchase::Checkout(response)) => self.apply_checkout(Ok(response), true),
                Ok(ExtraLifePurchase::CartNotEmpty) => {
                    self.ctx.notify(CART_NOT_EMPTY, NoticeKind::Error);
                    self.reload_cart();
                }
                Err(e) => self.apply_checkout(Err(e), true),
            },
            Background::Equipped { skin_id, result } => match result {
                Ok(()) => {
                    self.ctx.profile.equipped_skin = skin_id;
                    self.ctx.notify("Skin equipped!", NoticeKind::Success);
                }
                Err(e) => {
                    warn!("Could not equip {}: {}", skin_id, e);
                    self.ctx.notify(e.user_message("Could not equip"), NoticeKind::Error);
                }
            },
        }
    }

    /// Apply an order result. The cart is reloaded either way since the
    /// backend is the one that knows what is left in it.
    fn apply_checkout(&mut self, result: Result<CheckoutResponse, ApiError>, extra_life: bool) {
        self.reload_cart();
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!("Checkout failed: {}", e);
                self.ctx.notify(e.user_message("Checkout failed"), NoticeKind::Error);
                return;
            }
        };
        if !response.is_success() {
            info!("Checkout refused: {}", response.status);
            let message = response.message.unwrap_or_else(|| "Checkout failed".to_string());
            self.ctx.notify(message, NoticeKind::Error);
            return;
        }

        let profile = &mut self.ctx.profile;
        if let Some(balance) = response.balance {
            profile.balance = balance;
        }
        if let Some(owned) = response.owned_skins {
            profile.owned_skins = owned;
        }
        if let Some(equipped) = response.equipped_skin {
            profile.equipped_skin = equipped;
        }
        if let Some(extra_lives) = response.extra_lives {
            profile.extra_lives = extra_lives;
            self.ctx.engine.set_bonus_lives(extra_lives);
        }
        self.ctx.cart = Cart::default();

        let message = if extra_life {
            "Extra life ready, press Enter to play".to_string()
        } else {
            response.message.unwrap_or_else(|| "Purchase complete!".to_string())
        };
        self.ctx.notify(message, NoticeKind::Success);

        if let Some(api) = self.api.clone() {
            self.spawn(async move {
                let profile = load_profile_or_default(&api).await;
                Background::ProfileLoaded { profile, initial: false }
            });
        }
    }

    fn reload_cart(&self) {
        if let Some(api) = self.api.clone() {
            self.spawn(async move { Background::CartLoaded(load_cart_or_empty(&api).await) });
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = Background> + Send + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            // The receiver is gone only when the app is shutting down
            let _ = tx.send(task.await);
        });
    }
}

fn render_notice(frame: &mut Frame, notice: &Notice) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }
    let line = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    let color = match notice.kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let text = Paragraph::new(Span::styled(
        format!(" {} ", notice.text),
        Style::default().fg(Color::Black).bg(color),
    ));
    frame.render_widget(text, line);
}
