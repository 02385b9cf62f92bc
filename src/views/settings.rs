use crate::app::{App, AppView};
use crate::config::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style, Styled, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};

impl App {
    pub(crate) fn draw_settings(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Create layout
        let vertical = Layout::vertical([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Settings fields
            Constraint::Length(3), // Footer
        ]);
        let [title_area, settings_area, footer_area] = vertical.areas(area);

        // Title
        let title = Line::from("Settings").bold().blue().centered();
        frame.render_widget(Paragraph::new(title), title_area);

        let is_editing = !self.input_buffer.is_empty();

        // Show input_buffer if editing, otherwise show temp_config value
        let address_value = if is_editing {
            format!("{}_", self.input_buffer)
        } else {
            self.temp_config.node_address.clone()
        };
        let address_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let mut settings_text = vec![
            Line::from(""),
            Line::from(vec![
                "  Node address:   ".into(),
                address_value.set_style(address_style),
            ]),
            Line::from(""),
            Line::from(vec![
                "  Current config: ".dim(),
                Config::current_location().dim(),
            ]),
        ];

        // Add status message below the current config line if present
        if !self.status_message.is_empty() {
            settings_text.push(Line::from(""));
            settings_text.push(Line::from(format!("  {}", self.status_message)).green());
        }

        frame.render_widget(
            Paragraph::new(settings_text)
                .block(Block::default().title("Enter to edit, s to save; takes effect next start")),
            settings_area,
        );

        // Footer
        let footer_text = "Press Esc to go back  |  Enter to edit field  |  s to save";
        frame.render_widget(Paragraph::new(footer_text).centered(), footer_area);
    }

    pub(crate) fn handle_settings_input(&mut self, key: KeyEvent) {
        // If we're currently editing (input_buffer is not empty)
        if !self.input_buffer.is_empty() {
            match key.code {
                KeyCode::Enter => self.apply_edit(),
                KeyCode::Esc => {
                    self.input_buffer.clear();
                    self.status_message.clear();
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                }
                _ => {}
            }
            return;
        }

        // Normal settings navigation
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => {
                self.view = AppView::Status;
                self.status_message.clear();
            }
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Enter) => self.start_edit(),
            (_, KeyCode::Char('s')) => self.save_config(),
            _ => {}
        }
    }

    fn start_edit(&mut self) {
        self.input_buffer = self.temp_config.node_address.clone();
        self.status_message.clear();
    }

    fn apply_edit(&mut self) {
        self.temp_config.node_address = self.input_buffer.clone();
        self.status_message = "Address updated (press 's' to save)".to_string();
        self.input_buffer.clear();
    }

    fn save_config(&mut self) {
        match self.temp_config.save_to_home() {
            Ok(_) => {
                self.config = self.temp_config.clone();
                self.status_message =
                    format!("Configuration saved to {}", Config::current_location());
            }
            Err(e) => {
                self.status_message = format!("Failed to save: {}", e);
            }
        }
    }
}
