use crate::app::{App, AppView};
use crate::common::{ApiResult, IdentityResponse};
use crate::constants;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};
use tracing::{debug, info};

/// Display state for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Online,
    Offline,
}

impl NodeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NodeStatus::Online => "Online",
            NodeStatus::Offline => "Offline",
        }
    }
}

/// The one view-model behind the status screen.
///
/// Each field is a named region of the panel, written in place as
/// answers land. A `None` region has not been written yet and renders
/// as pending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusView {
    /// The `Online` / `Offline` line.
    pub online_status: Option<NodeStatus>,
    /// Free-text node name, written only while online.
    pub node_name: Option<String>,
    /// When the identity answer landed.
    pub checked_at: Option<DateTime<Local>>,
}

impl StatusView {
    pub fn set_online_status(&mut self, status: NodeStatus) {
        self.online_status = Some(status);
    }

    pub fn set_node_name(&mut self, name: impl Into<String>) {
        self.node_name = Some(name.into());
    }

    /// Reserved region for the node's model table.
    #[allow(dead_code)]
    pub(crate) fn set_models_in_table(&mut self, _models: &serde_json::Value) {
        // TODO: render the model list once the table layout lands
    }

    /// Fold an identity answer into the panel.
    ///
    /// Anything but the grid signature, a failed request included,
    /// lands on `Offline`; the name region is written only on the
    /// online path.
    pub fn apply_identity(&mut self, outcome: ApiResult<IdentityResponse>) {
        match outcome {
            Ok(identity) if identity.is_grid_node() => {
                self.set_online_status(NodeStatus::Online);
                self.set_node_name(constants::PLACEHOLDER_NODE_NAME);
            }
            Ok(_) | Err(_) => self.set_online_status(NodeStatus::Offline),
        }
        self.checked_at = Some(Local::now());
    }
}

impl App {
    pub(crate) fn draw_status(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let banner: Vec<_> = constants::STATUS_BANNER
            .map(Line::from)
            .into_iter()
            .collect();

        // Create layout
        let vertical = Layout::vertical([
            Constraint::Length(banner.len() as u16), // Banner
            Constraint::Min(0),                      // Status panel
            Constraint::Length(1),                   // Footer
        ]);
        let [banner_area, panel_area, footer_area] = vertical.areas(area);

        frame.render_widget(Paragraph::new(banner).centered(), banner_area);

        // Status panel
        let status_line = match self.status.online_status {
            Some(NodeStatus::Online) => Line::from(vec![
                "Node status: ".into(),
                NodeStatus::Online.label().green().bold(),
            ]),
            Some(NodeStatus::Offline) => Line::from(vec![
                "Node status: ".into(),
                NodeStatus::Offline.label().red().bold(),
            ]),
            None => Line::from(vec!["Node status: ".into(), "checking...".dim()]),
        };

        let mut lines = vec![Line::from(""), status_line];
        if let Some(name) = &self.status.node_name {
            lines.push(Line::from(vec![
                "Node name:   ".into(),
                name.clone().bold(),
            ]));
        }
        if let Some(checked_at) = self.status.checked_at {
            lines.push(Line::from(""));
            lines.push(Line::from(format!("checked at {}", checked_at.format("%H:%M:%S"))).dim());
        }

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::bordered().title("OpenGrid Node"))
                .centered(),
            panel_area,
        );

        // Footer
        let footer_text = format!(
            "Node: {}  |  s settings  |  Esc or q to quit",
            self.api.base_url()
        );
        frame.render_widget(
            Paragraph::new(footer_text)
                .style(Style::default().fg(Color::DarkGray))
                .centered(),
            footer_area,
        );
    }

    pub(crate) fn handle_status_input(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('s')) => {
                self.view = AppView::Settings;
                self.temp_config = self.config.clone();
                self.status_message.clear();
            }
            _ => {}
        }
    }

    /// Drain the answers of the two in-flight checks (called during
    /// tick, whichever screen is up).
    pub(crate) fn tick_status(&mut self) {
        if let Some(rx) = &mut self.identity_rx {
            if let Ok(outcome) = rx.try_recv() {
                debug!("identity answer: {outcome:?}");
                self.status.apply_identity(outcome);
                self.identity_rx = None;
            }
        }

        if let Some(rx) = &mut self.models_rx {
            if let Ok(outcome) = rx.try_recv() {
                if let Ok(models) = outcome {
                    // only logged; no region is written for now
                    info!("model list: {models}");
                    // self.status.set_models_in_table(&models);
                }
                self.models_rx = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RequestFailed;

    fn identity(data: &str) -> ApiResult<IdentityResponse> {
        Ok(IdentityResponse {
            data: data.to_string(),
        })
    }

    #[test]
    fn test_grid_identity_turns_the_panel_online() {
        let mut view = StatusView::default();
        view.apply_identity(identity("OpenGrid"));
        assert_eq!(view.online_status, Some(NodeStatus::Online));
        assert_eq!(view.node_name.as_deref(), Some("Bob"));
        assert!(view.checked_at.is_some());
    }

    #[test]
    fn test_unexpected_body_turns_the_panel_offline() {
        let mut view = StatusView::default();
        view.apply_identity(identity("anything-else"));
        assert_eq!(view.online_status, Some(NodeStatus::Offline));
        // name region stays unbound
        assert_eq!(view.node_name, None);
    }

    #[test]
    fn test_failed_request_turns_the_panel_offline() {
        let mut view = StatusView::default();
        view.apply_identity(Err(RequestFailed::new("connection refused")));
        assert_eq!(view.online_status, Some(NodeStatus::Offline));
        assert_eq!(view.node_name, None);
    }

    #[test]
    fn test_models_table_region_is_not_wired() {
        let mut view = StatusView::default();
        view.set_models_in_table(&serde_json::json!({"models": ["mnist"]}));
        // the model list is only logged; no region changes
        assert_eq!(view, StatusView::default());
    }

    #[test]
    fn test_regions_are_rewritten_in_place() {
        let mut view = StatusView::default();
        view.apply_identity(identity("OpenGrid"));
        view.apply_identity(identity("nginx"));
        assert_eq!(view.online_status, Some(NodeStatus::Offline));
        // a stale name survives an offline rewrite; only the online
        // path writes it
        assert_eq!(view.node_name.as_deref(), Some("Bob"));
    }
}
