use demo_state_protocol::{Color, ThemeColors, ThemeMode};

/// A simulated business tenant: display name plus its two palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientProfile {
    pub id: &'static str,
    /// Older identifiers still accepted from bookmarks and links.
    pub aliases: &'static [&'static str],
    pub name: &'static str,
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

impl ClientProfile {
    pub fn matches(&self, id: &str) -> bool {
        self.id == id || self.aliases.contains(&id)
    }

    pub fn theme(&self, mode: ThemeMode) -> ThemeColors {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }
}

pub const GENERIC_CLIENT_ID: &str = "generic";

const fn hex(v: u32) -> Color {
    Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

const fn palette(primary: u32, secondary: u32, accent: u32, background: u32, text: u32) -> ThemeColors {
    ThemeColors {
        primary_color: hex(primary),
        secondary_color: hex(secondary),
        accent_color: hex(accent),
        background_color: hex(background),
        text_color: hex(text),
    }
}

// Dark palettes keep a near-white background; only the brand colors lighten.
pub const DEFAULT_LIGHT: ThemeColors = palette(0x3b82f6, 0x10b981, 0xf97316, 0xffffff, 0x1f2937);
pub const DEFAULT_DARK: ThemeColors = palette(0x60a5fa, 0x34d399, 0xfb923c, 0xf8fafc, 0x334155);

static CLIENTS: [ClientProfile; 5] = [
    ClientProfile {
        id: "deacons-pizza",
        aliases: &["deacons"],
        name: "Deacon's Pizza",
        light: palette(0xef4444, 0x84cc16, 0xf97316, 0xffffff, 0x1f2937),
        dark: palette(0xf87171, 0xa3e635, 0xfb923c, 0xf8fafc, 0x334155),
    },
    ClientProfile {
        id: "cvs",
        aliases: &[],
        name: "CVS",
        light: palette(0xc42032, 0x3268cc, 0xf97316, 0xffffff, 0x1f2937),
        dark: palette(0xdc4251, 0x5b85d6, 0xfb923c, 0xf8fafc, 0x334155),
    },
    ClientProfile {
        id: "seven-eleven",
        aliases: &[],
        name: "7-Eleven",
        light: palette(0xe30613, 0x008651, 0xf97316, 0xffffff, 0x1f2937),
        dark: palette(0xf03a46, 0x33a67e, 0xfb923c, 0xf8fafc, 0x334155),
    },
    ClientProfile {
        id: "schwab",
        aliases: &[],
        name: "Charles Schwab",
        light: palette(0x009ddb, 0x1b53b1, 0x00a86b, 0xffffff, 0x1f2937),
        dark: palette(0x1e90ff, 0x4169e1, 0x32cd32, 0xf8fafc, 0x334155),
    },
    ClientProfile {
        id: GENERIC_CLIENT_ID,
        aliases: &[],
        name: "Generic Business",
        light: DEFAULT_LIGHT,
        dark: DEFAULT_DARK,
    },
];

/// All registered clients, in presentation order.
pub fn clients() -> &'static [ClientProfile] {
    &CLIENTS
}

/// Find a client by its id or one of its aliases.
pub fn find_client(id: &str) -> Option<&'static ClientProfile> {
    CLIENTS.iter().find(|c| c.matches(id))
}

/// Display name for a client id. Unregistered ids are shown as-is.
pub fn client_name(id: &str) -> String {
    find_client(id).map_or_else(|| id.to_owned(), |c| c.name.to_owned())
}

/// Resolve the palette for a client and mode.
///
/// Never fails: unknown clients get the default palette for `mode`.
pub fn lookup_theme(client_id: &str, mode: ThemeMode) -> ThemeColors {
    match find_client(client_id) {
        Some(client) => client.theme(mode),
        None => match mode {
            ThemeMode::Light => DEFAULT_LIGHT,
            ThemeMode::Dark => DEFAULT_DARK,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_resolves_to_same_client() {
        let canonical = find_client("deacons-pizza");
        assert!(canonical.is_some());
        assert_eq!(find_client("deacons"), canonical);
    }

    #[test]
    fn client_name_falls_back_to_id() {
        assert_eq!(client_name("schwab"), "Charles Schwab");
        assert_eq!(client_name("acme-hardware"), "acme-hardware");
    }

    #[test]
    fn theme_lookup_uses_mode() {
        let light = lookup_theme("cvs", ThemeMode::Light);
        let dark = lookup_theme("cvs", ThemeMode::Dark);
        assert_eq!(light.primary_color.to_string(), "#c42032");
        assert_eq!(dark.primary_color.to_string(), "#dc4251");
    }

    #[test]
    fn unknown_client_gets_default_theme() {
        assert_eq!(lookup_theme("nobody", ThemeMode::Light), DEFAULT_LIGHT);
        assert_eq!(lookup_theme("nobody", ThemeMode::Dark), DEFAULT_DARK);
    }

    #[test]
    fn client_ids_are_unique() {
        for (i, a) in clients().iter().enumerate() {
            for b in &clients()[i + 1..] {
                assert!(!b.matches(a.id), "{} registered twice", a.id);
            }
        }
    }
}
