// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::{grapheme_count, grapheme_range, width_upto};

/// A vertical stack of labelled fields with one focused at a time.
///
/// Enter submits the form; Ctrl-D requests deletion. Whether deletion
/// actually happens is up to the session the action lands in.
pub struct Form<S> {
    items: Vec<Box<dyn FormItem<S>>>,
    item_index: usize,
}

impl<S> Form<S> {
    pub fn new(items: Vec<Box<dyn FormItem<S>>>) -> Self {
        Self {
            items,
            item_index: 0,
        }
    }

    fn layout(&self) -> Layout {
        Layout::vertical(self.items.iter().map(|_| Constraint::Max(3))).margin(1)
    }

    fn navigate(&mut self, dispatcher: &mut Dispatcher, session: &RefCell<S>, offset: isize) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, session);
        }

        let len = self.items.len();
        self.item_index = if offset > 0 {
            (self.item_index + 1) % len
        } else {
            (self.item_index + len - 1) % len
        };

        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, session);
        }
    }
}

impl<S> Component<S> for Form<S> {
    fn render(&self, session: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.layout().split(area);
        let last = self.items.len().saturating_sub(1);
        for (i, (item, area)) in self.items.iter().zip(areas.iter()).enumerate() {
            item_render(i == last, item, *area, buf);
            item.render(session, item_inner(*area), buf);
        }
    }

    fn get_cursor_position(&self, session: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.items
            .iter()
            .zip(self.layout().split(area).iter())
            .nth(self.item_index)
            .and_then(|(item, area)| item.get_cursor_position(session, *area))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        session: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let areas = self.layout().split(area);
        if let Some((item, subarea)) = self
            .items
            .iter_mut()
            .zip(areas.iter())
            .nth(self.item_index)
            && let Some(msg) = item.on_key(dispatcher, session, *subarea, event)
        {
            return Some(msg);
        }

        match event.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.navigate(dispatcher, session, -1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Down | KeyCode::Tab => {
                self.navigate(dispatcher, session, 1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Enter => {
                dispatcher.dispatch(Action::SubmitChanges);
                Some(Message::Exit)
            }
            KeyCode::Char('d') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                dispatcher.dispatch(Action::RequestDelete);
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, session: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, session);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, session: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, session);
        }
    }
}

pub trait FormItem<S>: Component<S> {
    fn item_title(&self) -> &str;
    fn item_active(&self) -> bool;
}

impl<S> Component<S> for Box<dyn FormItem<S>> {
    fn render(&self, session: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        (**self).render(session, area, buf)
    }

    fn get_cursor_position(&self, session: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        (**self).get_cursor_position(session, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        session: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        (**self).on_key(dispatcher, session, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, session: &RefCell<S>) {
        (**self).activate(dispatcher, session)
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, session: &RefCell<S>) {
        (**self).deactivate(dispatcher, session)
    }
}

impl<S> FormItem<S> for Box<dyn FormItem<S>> {
    fn item_title(&self) -> &str {
        (**self).item_title()
    }

    fn item_active(&self) -> bool {
        (**self).item_active()
    }
}

/// A lens from the session to one editable string field.
pub trait Access<S> {
    fn get(session: &RefCell<S>) -> String;
    fn set(dispatcher: &mut Dispatcher, value: String);
}

/// Single-line text input editing a session field through an [`Access`].
pub struct Input<S, A: Access<S>> {
    title: String,
    active: bool,
    cursor: usize, // grapheme index
    _phantom_s: std::marker::PhantomData<S>,
    _phantom_a: std::marker::PhantomData<A>,
}

impl<S, A: Access<S>> Input<S, A> {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            active: false,
            cursor: 0,
            _phantom_s: std::marker::PhantomData,
            _phantom_a: std::marker::PhantomData,
        }
    }
}

impl<S, A: Access<S>> Component<S> for Input<S, A> {
    fn render(&self, session: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = A::get(session);
        Paragraph::new(v.as_str()).render(area, buf);
    }

    fn get_cursor_position(&self, session: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }

        let v = A::get(session);
        let width = width_upto(&v, self.cursor);
        let x = area.x + (width as u16) + 2; // sider 1 + padding 1
        let y = area.y + 1; // title line: 1
        Some((x, y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        session: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if !self.active || !event.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return None;
        }

        match event.code {
            KeyCode::Left if self.cursor > 0 => self.cursor -= 1,
            KeyCode::Right if self.cursor < grapheme_count(&A::get(session)) => self.cursor += 1,
            KeyCode::Backspace if self.cursor > 0 => {
                let mut v = A::get(session);
                if let Some(range) = grapheme_range(&v, self.cursor - 1) {
                    v.replace_range(range, "");
                    A::set(dispatcher, v);
                    self.cursor -= 1;
                }
            }
            KeyCode::Char(c) => {
                let mut v = A::get(session);
                let byte_index = grapheme_range(&v, self.cursor)
                    .map(|r| r.start)
                    .unwrap_or(v.len());
                v.insert(byte_index, c);
                A::set(dispatcher, v);
                self.cursor += 1;
            }
            _ => return None,
        }
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, session: &RefCell<S>) {
        self.active = true;
        // place the cursor at the end of the existing value
        self.cursor = grapheme_count(&A::get(session));
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _session: &RefCell<S>) {
        self.active = false;
        self.cursor = 0;
    }
}

impl<S, A: Access<S>> FormItem<S> for Input<S, A> {
    fn item_title(&self) -> &str {
        &self.title
    }

    fn item_active(&self) -> bool {
        self.active
    }
}

const S_STEP_ACTIVE: &str = "◆";
const S_STEP_INACTIVE: &str = "◇";
const S_SIDER_CONNECTOR: &str = "│";
const S_SIDER_BOTTOM: &str = "└";

fn item_render<S>(is_last: bool, item: &impl FormItem<S>, area: Rect, buf: &mut Buffer) {
    let color = if item.item_active() {
        Color::Blue
    } else {
        Color::Gray
    };

    let area_title = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
    Clear.render(area_title, buf);
    Paragraph::new(item.item_title())
        .bold()
        .fg(color)
        .render(area_title, buf);

    if let Some(c) = buf.cell_mut((area.x, area.y)) {
        let symbol = if item.item_active() {
            S_STEP_ACTIVE
        } else {
            S_STEP_INACTIVE
        };
        c.set_symbol(symbol);
        c.set_fg(color);
    }

    for y in 1..area.height.saturating_sub(1) {
        if let Some(c) = buf.cell_mut((area.x, area.y + y)) {
            c.set_symbol(S_SIDER_CONNECTOR);
            c.set_fg(color);
        }
    }

    if let Some(c) = buf.cell_mut((area.x, area.y + area.height.saturating_sub(1))) {
        let symbol = if is_last {
            S_SIDER_BOTTOM
        } else {
            S_SIDER_CONNECTOR
        };
        c.set_symbol(symbol);
        c.set_fg(color);
    }
}

fn item_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
