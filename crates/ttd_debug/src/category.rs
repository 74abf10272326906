use std::fmt;

/// Subsystems whose debug verbosity can be configured independently.
///
/// The order of the variants is the order used by [`Category::ALL`], the debug
/// string and the facility name dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Video, sound and music drivers.
    Driver,
    /// NewGRF loading and handling.
    Grf,
    /// Map generation and manipulation.
    Map,
    /// Everything that fits nowhere else, including profiling output.
    Misc,
    /// Network connections and the game protocol.
    Net,
    /// Sprite loading and caching.
    Sprite,
    /// Loading of TTD and TTO savegames.
    Oldloader,
    /// The NPF pathfinder.
    Npf,
    /// The YAPF pathfinder.
    Yapf,
    /// Font loading and glyph caching.
    Fontcache,
    /// AI and game scripts.
    Script,
    /// Saving and loading.
    Sl,
    /// The game log kept in savegames.
    Gamelog,
    /// Multiplayer desync diagnostics.
    Desync,
    /// Cross-checks of YAPF results for desyncs.
    Yapfdesync,
    /// The in-game console.
    Console,
    /// Link graph jobs for cargo distribution.
    Linkgraph,
    /// Sound effects and music playback.
    Sound,
    /// Execution of game commands.
    Command,
    /// Every call into the game's random number generator.
    #[cfg(feature = "random-debug")]
    Random,
    /// Per-tick game state checksums.
    #[cfg(feature = "random-debug")]
    Statecsum,
}

impl Category {
    /// Every category, in table order.
    pub const ALL: &'static [Category] = &[
        Category::Driver,
        Category::Grf,
        Category::Map,
        Category::Misc,
        Category::Net,
        Category::Sprite,
        Category::Oldloader,
        Category::Npf,
        Category::Yapf,
        Category::Fontcache,
        Category::Script,
        Category::Sl,
        Category::Gamelog,
        Category::Desync,
        Category::Yapfdesync,
        Category::Console,
        Category::Linkgraph,
        Category::Sound,
        Category::Command,
        #[cfg(feature = "random-debug")]
        Category::Random,
        #[cfg(feature = "random-debug")]
        Category::Statecsum,
    ];

    /// Number of categories compiled in.
    pub const COUNT: usize = Self::ALL.len();

    /// Lowercase name used in debug strings and log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Driver => "driver",
            Category::Grf => "grf",
            Category::Map => "map",
            Category::Misc => "misc",
            Category::Net => "net",
            Category::Sprite => "sprite",
            Category::Oldloader => "oldloader",
            Category::Npf => "npf",
            Category::Yapf => "yapf",
            Category::Fontcache => "fontcache",
            Category::Script => "script",
            Category::Sl => "sl",
            Category::Gamelog => "gamelog",
            Category::Desync => "desync",
            Category::Yapfdesync => "yapfdesync",
            Category::Console => "console",
            Category::Linkgraph => "linkgraph",
            Category::Sound => "sound",
            Category::Command => "command",
            #[cfg(feature = "random-debug")]
            Category::Random => "random",
            #[cfg(feature = "random-debug")]
            Category::Statecsum => "statecsum",
        }
    }

    /// Looks a category up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Category> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(name))
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
