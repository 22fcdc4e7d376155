use super::View;
use crate::app::{AppCommand, AppContext};
use crate::render::tui_color;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use common::{Cart, Skin, Wardrobe, EXTRA_LIFE_ITEM_ID, EXTRA_LIFE_PRICE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFocus {
    Catalog,
    Cart,
}

/// One row of the catalog panel.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub item_id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub skin: Option<&'static Skin>,
}

pub fn catalog() -> Vec<CatalogEntry> {
    let mut entries = vec![CatalogEntry {
        item_id: EXTRA_LIFE_ITEM_ID,
        name: "Extra Life",
        price: EXTRA_LIFE_PRICE,
        skin: None,
    }];
    entries.extend(Skin::all().iter().map(|skin| CatalogEntry {
        item_id: skin.id,
        name: skin.name,
        price: skin.price,
        skin: Some(skin),
    }));
    entries
}

#[derive(Debug)]
pub struct StoreState {
    catalog: Vec<CatalogEntry>,
    focus: StoreFocus,
    catalog_index: usize,
    cart_index: usize,
}

impl StoreState {
    pub fn new() -> Self {
        Self {
            catalog: catalog(),
            focus: StoreFocus::Catalog,
            catalog_index: 0,
            cart_index: 0,
        }
    }

    /// Keep the cart cursor on an existing line after the cart changed.
    pub fn clamp_selection(&mut self, cart: &Cart) {
        self.cart_index = self.cart_index.min(cart.items.len().saturating_sub(1));
        if cart.is_empty() {
            self.focus = StoreFocus::Catalog;
        }
    }

    fn move_selection(&mut self, delta: isize, cart: &Cart) {
        let (index, len) = match self.focus {
            StoreFocus::Catalog => (&mut self.catalog_index, self.catalog.len()),
            StoreFocus::Cart => (&mut self.cart_index, cart.items.len()),
        };
        if len == 0 {
            return;
        }
        *index = (*index as isize + delta).clamp(0, len as isize - 1) as usize;
    }

    fn activate_catalog_entry(&self, wardrobe: &Wardrobe) -> Option<AppCommand> {
        let entry = self.catalog.get(self.catalog_index)?;
        match entry.skin {
            Some(skin) if wardrobe.owns(skin.id) => {
                if wardrobe.equipped == skin.id {
                    None
                } else {
                    Some(AppCommand::Equip(skin.id.to_string()))
                }
            }
            _ => Some(AppCommand::AddToCart {
                item_id: entry.item_id.to_string(),
                price: entry.price,
            }),
        }
    }

    fn change_quantity(&self, cart: &Cart, delta: i32) -> Option<AppCommand> {
        let item = cart.items.get(self.cart_index)?;
        let quantity = cart.adjusted_quantity(&item.id, delta)?;
        if quantity == item.quantity {
            return None;
        }
        Some(AppCommand::SetQuantity { line_id: item.id.clone(), quantity })
    }

    fn render_catalog(&self, frame: &mut Frame, area: Rect, ctx: &AppContext) {
        let wardrobe = ctx.profile.wardrobe();
        let focused = self.focus == StoreFocus::Catalog;
        let items: Vec<ListItem> = self
            .catalog
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let status = match entry.skin {
                    Some(skin) if wardrobe.equipped == skin.id => "equipped".to_string(),
                    Some(skin) if wardrobe.owns(skin.id) => "owned".to_string(),
                    _ => format!("{} coins", entry.price),
                };
                let swatch = match entry.skin {
                    Some(skin) => Span::styled("██ ", Style::default().fg(tui_color(skin.head))),
                    None => Span::styled("♥  ", Style::default().fg(Color::Red)),
                };
                let style = if focused && i == self.catalog_index {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    swatch,
                    Span::styled(format!("{:<14}", entry.name), style),
                    Span::styled(status, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(format!("Store | {} coins", ctx.profile.balance))
                .borders(Borders::ALL)
                .border_style(panel_border(focused)),
        );
        frame.render_widget(list, area);
    }

    fn render_cart(&self, frame: &mut Frame, area: Rect, ctx: &AppContext) {
        let cart = &ctx.cart;
        let focused = self.focus == StoreFocus::Cart;
        let mut items: Vec<ListItem> = cart
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if focused && i == self.cart_index {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<14}", item.name), style),
                    Span::raw(format!("x{:<3}", item.quantity)),
                    Span::styled(format!("{:>6}", item.line_total()), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();
        if cart.is_empty() {
            items.push(ListItem::new(Span::styled("Your cart is empty", Style::default().fg(Color::DarkGray))));
        }

        let list = List::new(items).block(
            Block::default()
                .title(format!("Cart ({}) | Total: {}", cart.item_count(), cart.total))
                .borders(Borders::ALL)
                .border_style(panel_border(focused)),
        );
        frame.render_widget(list, area);
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

impl View for StoreState {
    fn handle_input(&mut self, key: KeyEvent, ctx: &mut AppContext) -> Option<AppCommand> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(AppCommand::Quit),
            KeyCode::Esc | KeyCode::Char('q') => Some(AppCommand::ShowMenu),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    StoreFocus::Catalog if !ctx.cart.is_empty() => StoreFocus::Cart,
                    _ => StoreFocus::Catalog,
                };
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1, &ctx.cart);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1, &ctx.cart);
                None
            }
            KeyCode::Char('c') => Some(AppCommand::Checkout),
            KeyCode::Enter if self.focus == StoreFocus::Catalog => {
                self.activate_catalog_entry(&ctx.profile.wardrobe())
            }
            KeyCode::Char('+') | KeyCode::Char('=') if self.focus == StoreFocus::Cart => {
                self.change_quantity(&ctx.cart, 1)
            }
            KeyCode::Char('-') if self.focus == StoreFocus::Cart => self.change_quantity(&ctx.cart, -1),
            KeyCode::Char('d') | KeyCode::Delete if self.focus == StoreFocus::Cart => ctx
                .cart
                .items
                .get(self.cart_index)
                .map(|item| AppCommand::RemoveFromCart(item.id.clone())),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, ctx: &AppContext) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());
        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        self.render_catalog(frame, panels[0], ctx);
        self.render_cart(frame, panels[1], ctx);

        let help = Paragraph::new("↑/↓: Select | Enter: Add/Equip | Tab: Cart | +/-: Qty | d: Remove | c: Checkout | Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, rows[1]);
    }
}
