use std::time::Duration;

use demo_state_core::catalog::{self, CatalogEntry, Spotlight, ROLES, SCENARIOS};
use demo_state_core::lookup;
use demo_state_core::{DemoSession, PanelState};
use demo_state_protocol::{Selection, SelectionPatch, ThemeMode, Version};
use eframe::egui;

use crate::host::Host;
use crate::theme;

/// How often the address bar is re-read for back/forward navigations.
const LOCATION_POLL: Duration = Duration::from_millis(250);

/// Presenter panel: selection pickers, spotlight search and both histories.
pub struct DemoApp<H: Host> {
    session: DemoSession<H>,
    /// Query string last seen in the address bar.
    seen_query: String,
    panel: PanelState,
    spotlight: Spotlight,
    /// Client and mode whose palette is currently applied to egui.
    applied_theme: Option<(String, ThemeMode)>,
}

impl<H: Host> DemoApp<H> {
    pub fn new(cc: &eframe::CreationContext<'_>, host: H) -> Self {
        theme::apply_typography(&cc.egui_ctx);
        Self::with_session(DemoSession::new(host))
    }

    fn with_session(session: DemoSession<H>) -> Self {
        let panel = session
            .location()
            .load_panel(&session.config().panel_storage_key);
        let seen_query = session.location().query();
        Self {
            session,
            seen_query,
            panel,
            spotlight: Spotlight::new(),
            applied_theme: None,
        }
    }

    /// Pick up navigations made outside the panel.
    fn poll_location(&mut self) {
        let query = self.session.location().query();
        if query != self.seen_query {
            self.seen_query = query;
            self.session.navigated();
        }
    }

    fn apply(&mut self, patch: SelectionPatch) {
        self.session.update(patch);
        self.seen_query = self.session.location().query();
    }

    fn go_to_instance(&mut self, index: usize) {
        self.session.go_to_instance(index);
        self.seen_query = self.session.location().query();
    }

    fn reset(&mut self) {
        self.session.reset_to_default();
        self.seen_query = self.session.location().query();
    }

    fn pick(&mut self, entry: &CatalogEntry) {
        let href = self.session.select_entry(entry);
        log::debug!("opening {href}");
        if self.session.location_mut().open(&href) {
            self.session.navigated();
        }
        self.seen_query = self.session.location().query();
        self.spotlight.clear();
    }

    fn set_panel(&mut self, panel: PanelState) {
        if panel == self.panel {
            return;
        }
        self.panel = panel;
        let key = self.session.config().panel_storage_key.clone();
        self.session.location_mut().save_panel(&key, panel);
    }

    fn sync_visuals(&mut self, ctx: &egui::Context) {
        let selection = self.session.selection();
        let key = (selection.client_id.clone(), selection.theme_mode);
        if self.applied_theme.as_ref() != Some(&key) {
            let colors = self.session.store().theme();
            ctx.set_visuals(theme::client_visuals(&colors, key.1));
            self.applied_theme = Some(key);
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        let mut panel = self.panel;
        ui.horizontal(|ui| {
            ui.heading("Demo selector");
            ui.separator();

            let store = self.session.store();
            let profile = store.user_profile();
            ui.label(store.client_name());
            ui.label(
                egui::RichText::new(format!("{} · {}", profile.full_name(), profile.title)).small(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.selectable_label(panel.open, "⚙ Settings").clicked() {
                    panel.toggle_open();
                }
            });
        });
        self.set_panel(panel);
    }

    fn settings(&mut self, ui: &mut egui::Ui) {
        let mut panel = self.panel;
        ui.horizontal(|ui| {
            ui.strong("Settings");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").clicked() {
                    panel.toggle_open();
                }
                let pin = if panel.pinned { "📌 Pinned" } else { "📌 Pin" };
                if ui.selectable_label(panel.pinned, pin).clicked() {
                    panel.toggle_pinned();
                }
                let fold = if panel.collapsed { "▸" } else { "▾" };
                if ui.small_button(fold).clicked() {
                    panel.toggle_collapsed();
                }
            });
        });
        self.set_panel(panel);
        if self.panel.collapsed {
            return;
        }
        ui.separator();

        let current = self.session.selection().clone();
        let patch = selection_pickers(ui, &current);
        if !patch.is_empty() {
            self.apply(patch);
        }

        ui.horizontal(|ui| {
            if ui.button("💾 Save instance").clicked() {
                self.session.save_current_instance();
            }
            if ui.button("↺ Reset").clicked() {
                self.reset();
            }
        });

        ui.separator();
        let recent = self.session.recent();
        ui.label(
            egui::RichText::new(recent_heading(recent.len(), recent.capacity())).small(),
        );
        let mut restore = None;
        for selection in self.session.recent().entries() {
            if ui.link(describe(selection)).clicked() {
                restore = Some(SelectionPatch::from(selection));
            }
        }
        if self.session.recent().is_empty() {
            ui.weak("Nothing yet");
        }
        if let Some(patch) = restore {
            self.apply(patch);
        }

        ui.separator();
        ui.label(egui::RichText::new("Saved instances").small());
        let current_index = self.session.instances().current_index();
        let mut jump = None;
        for (i, instance) in self.session.instances().instances().iter().enumerate() {
            let text = format!(
                "{}. {} · {}",
                i + 1,
                instance.client_name,
                describe(&instance.selection)
            );
            if ui.selectable_label(current_index == Some(i), text).clicked() {
                jump = Some(i);
            }
        }
        if let Some(i) = jump {
            self.go_to_instance(i);
        }
    }

    fn spotlight(&mut self, ui: &mut egui::Ui) {
        let mut query = self.spotlight.query().to_owned();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search demos…")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.spotlight.set_query(query);
        }

        let (down, up, enter) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::Enter),
            )
        });
        if down {
            self.spotlight.select_next();
        }
        if up {
            self.spotlight.select_previous();
        }

        let mut picked = if enter && response.lost_focus() {
            self.spotlight.selected()
        } else {
            None
        };

        let highlighted = self.spotlight.selected();
        let results = self.spotlight.results().to_vec();
        if results.is_empty() {
            ui.weak("No demos match");
        }
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (category, entries) in catalog::group_by_category(&results) {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(category).small().strong());
                for entry in entries {
                    let active = highlighted.is_some_and(|h| std::ptr::eq(h, entry));
                    let text = format!("{} {}", entry.emoji, entry.title);
                    let response = ui
                        .selectable_label(active, text)
                        .on_hover_text(entry.description);
                    if response.clicked() {
                        picked = Some(entry);
                    }
                }
            }
        });

        if let Some(entry) = picked {
            self.pick(entry);
        }
    }
}

/// Combo boxes and toggles for the five selection fields. Returns the edits
/// made this frame.
fn selection_pickers(ui: &mut egui::Ui, current: &Selection) -> SelectionPatch {
    let mut role = current.role.clone();
    let mut client_id = current.client_id.clone();
    let mut scenario = current.scenario.clone();
    let mut version = current.version;
    let mut theme_mode = current.theme_mode;

    egui::Grid::new("selection_pickers")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Role");
            egui::ComboBox::from_id_salt("role")
                .selected_text(role.clone())
                .show_ui(ui, |ui| {
                    for r in ROLES {
                        ui.selectable_value(&mut role, r.to_owned(), r);
                    }
                });
            ui.end_row();

            ui.label("Client");
            egui::ComboBox::from_id_salt("client")
                .selected_text(lookup::client_name(&client_id))
                .show_ui(ui, |ui| {
                    for client in lookup::clients() {
                        ui.selectable_value(&mut client_id, client.id.to_owned(), client.name);
                    }
                });
            ui.end_row();

            ui.label("Scenario");
            egui::ComboBox::from_id_salt("scenario")
                .selected_text(scenario.clone())
                .show_ui(ui, |ui| {
                    for s in SCENARIOS {
                        ui.selectable_value(&mut scenario, s.to_owned(), s);
                    }
                });
            ui.end_row();

            ui.label("Version");
            egui::ComboBox::from_id_salt("version")
                .selected_text(version.as_str())
                .show_ui(ui, |ui| {
                    for v in Version::ALL {
                        ui.selectable_value(&mut version, v, v.as_str());
                    }
                });
            ui.end_row();

            ui.label("Theme");
            let theme_label = match theme_mode {
                ThemeMode::Dark => "🌙 Dark",
                ThemeMode::Light => "☀ Light",
            };
            if ui.button(theme_label).clicked() {
                theme_mode = theme_mode.toggled();
            }
            ui.end_row();
        });

    let mut patch = SelectionPatch::default();
    if role != current.role {
        patch = patch.role(role);
    }
    if client_id != current.client_id {
        patch = patch.client_id(client_id);
    }
    if scenario != current.scenario {
        patch = patch.scenario(scenario);
    }
    if version != current.version {
        patch = patch.version(version);
    }
    if theme_mode != current.theme_mode {
        patch = patch.theme_mode(theme_mode);
    }
    patch
}

fn recent_heading(len: usize, capacity: usize) -> String {
    format!("Recent ({len}/{capacity})")
}

fn describe(selection: &Selection) -> String {
    format!(
        "{} / {} / {} ({})",
        selection.role, selection.client_id, selection.scenario, selection.version
    )
}

impl<H: Host + 'static> eframe::App for DemoApp<H> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_location();
        self.sync_visuals(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));

        if self.panel.open {
            egui::SidePanel::right("settings")
                .resizable(false)
                .default_width(280.0)
                .show(ctx, |ui| self.settings(ui));
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.monospace(self.session.location().query());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // Escape dismisses an unpinned panel.
            if self.panel.open
                && !self.panel.pinned
                && ui.input(|i| i.key_pressed(egui::Key::Escape))
            {
                let mut panel = self.panel;
                panel.toggle_open();
                self.set_panel(panel);
            }
            self.spotlight(ui);
        });

        ctx.request_repaint_after(LOCATION_POLL);
    }
}

#[cfg(test)]
mod tests {
    use demo_state_core::{Location, MemoryLocation};

    use super::*;

    fn app(href: &str) -> DemoApp<MemoryLocation> {
        DemoApp::with_session(DemoSession::new(MemoryLocation::from_href(href)))
    }

    #[test]
    fn external_navigation_is_picked_up() {
        let mut app = app("/");
        app.session
            .location_mut()
            .navigate("/support?role=support&client=cvs");
        app.poll_location();
        assert_eq!(app.session.selection().role, "support");
        assert_eq!(app.session.store().client_name(), "CVS");
    }

    #[test]
    fn own_rewrite_is_not_treated_as_navigation() {
        let mut app = app("/");
        app.apply(SelectionPatch::default().scenario("offers"));
        let recent = app.session.recent().len();
        app.poll_location();
        assert_eq!(app.session.recent().len(), recent);
        assert_eq!(app.seen_query, app.session.location().query());
    }

    #[test]
    fn picking_an_entry_opens_its_page() {
        let mut app = app("/");
        let entry = catalog::search("token catalog")[0];
        app.spotlight.set_query("token");
        app.pick(entry);
        assert_eq!(app.session.location().path(), "/demos/cvs-token-catalog");
        assert_eq!(app.session.selection().scenario, "token-management");
        assert_eq!(app.spotlight.query(), "");
    }

    #[test]
    fn picking_on_an_in_place_host_reads_the_new_address() {
        let mut app = app("/?utm=mail");
        let entry = catalog::search("multi-location")[0];
        app.pick(entry);
        assert_eq!(app.session.location().path(), "/demos/cvs/campaign-creation");
        assert_eq!(app.seen_query, app.session.location().query());
        assert_eq!(app.session.selection().client_id, "cvs");
    }

    #[test]
    fn recent_heading_shows_fill_level() {
        let app = app("/");
        let recent = app.session.recent();
        assert_eq!(recent_heading(recent.len(), recent.capacity()), "Recent (0/5)");
    }

    #[test]
    fn describe_is_compact() {
        let selection = Selection::new(
            "merchant",
            "cvs",
            "dashboard",
            ThemeMode::Light,
            Version::Future,
        );
        assert_eq!(describe(&selection), "merchant / cvs / dashboard (future)");
    }
}
