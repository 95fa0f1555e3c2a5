// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// A bordered page wrapping a single component, with key hints at the
/// bottom. Esc exits.
pub struct SinglePage<S, C: Component<S>> {
    title: String,
    with_delete_hint: bool,
    inner: C,
    _phantom: std::marker::PhantomData<S>,
}

impl<S, C: Component<S>> SinglePage<S, C> {
    pub fn new(title: String, with_delete_hint: bool, inner: C) -> Self {
        Self {
            title,
            with_delete_hint,
            inner,
            _phantom: std::marker::PhantomData,
        }
    }

    fn block(&self) -> Block {
        Block::bordered().border_set(border::ROUNDED)
    }

    fn instructions(&self) -> Line<'static> {
        let mut spans = vec![
            " Submit ".into(),
            "<Enter>".blue().bold(),
            " Cancel ".into(),
            "<Esc>".blue().bold(),
        ];
        if self.with_delete_hint {
            spans.push(" Delete ".into());
            spans.push("<Ctrl-D>".blue().bold());
        }
        spans.push(" ".into());
        Line::from(spans)
    }
}

impl<S, C: Component<S>> Component<S> for SinglePage<S, C> {
    fn render(&self, session: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let title = Line::from(format!(" {} ", self.title).bold());
        let block = self
            .block()
            .title(title.centered())
            .title_bottom(self.instructions().centered())
            .white();

        let inner_area = block.inner(area);
        block.render(area, buf);
        self.inner.render(session, inner_area, buf);
    }

    fn get_cursor_position(&self, session: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let inner_area = self.block().inner(area);
        self.inner.get_cursor_position(session, inner_area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        session: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let inner_area = self.block().inner(area);
        if let Some(msg) = self.inner.on_key(dispatcher, session, inner_area, event) {
            return Some(msg);
        }

        match event.code {
            KeyCode::Esc => Some(Message::Exit),
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, session: &RefCell<S>) {
        self.inner.activate(dispatcher, session);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, session: &RefCell<S>) {
        self.inner.deactivate(dispatcher, session);
    }
}
