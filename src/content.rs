//! Static copy for the showcase sections.

pub const APP_NAME: &str = "Smart Clipboard";
pub const TAGLINE: &str = "Your productivity booster – a smarter clipboard for macOS.";

pub const REPO_URL: &str = "https://github.com/Humayun63/SmartClipboard";
pub const RELEASES_URL: &str = "https://github.com/Humayun63/SmartClipboard/releases/";
pub const ISSUES_URL: &str = "https://github.com/Humayun63/SmartClipboard/issues";
pub const DOCS_URL: &str = "https://github.com/Humayun63/SmartClipboard/blob/main/README.md";

pub const HERO_CHIPS: [&str; 4] = [
    "📋 50+ Item History",
    "⚡ Global Shortcuts",
    "🎨 10+ Themes",
    "🔧 Open Source",
];

/// Page sections reachable from the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Features,
    Themes,
    Troubleshooting,
    Contribute,
}

impl Section {
    pub const NAV: [Section; 4] = [
        Section::Features,
        Section::Themes,
        Section::Troubleshooting,
        Section::Contribute,
    ];

    /// Label used in the header navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::Themes => "Themes",
            Section::Troubleshooting => "Help",
            Section::Contribute => "Contribute",
        }
    }

    /// Label used in the footer quick links
    pub fn link_label(&self) -> &'static str {
        match self {
            Section::Troubleshooting => "Troubleshooting",
            other => other.nav_label(),
        }
    }
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: [&'static str; 3],
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "📋",
        title: "Clipboard History Manager",
        description: "Automatically captures and stores up to 50 clipboard items with persistent storage.",
        details: ["Real-time clipboard monitoring", "Persistent storage", "Configurable history size"],
    },
    Feature {
        icon: "⚡",
        title: "Lightning Fast Access",
        description: "Quick paste shortcuts and smart paste menu for instant productivity.",
        details: ["Cmd+Option+V for paste menu", "Cmd+Alt+1-9 for quick paste", "Instant search & filter"],
    },
    Feature {
        icon: "🎨",
        title: "Beautiful Themes",
        description: "Choose from 10+ carefully crafted themes to match your workflow.",
        details: ["Light & Dark modes", "Developer themes", "Custom color schemes"],
    },
    Feature {
        icon: "🛡",
        title: "Privacy First",
        description: "All data stored locally on your device. No network communication.",
        details: ["Local storage only", "No data collection", "Secure IPC communication"],
    },
    Feature {
        icon: "⌨",
        title: "Global Shortcuts",
        description: "Access your clipboard from anywhere with customizable keyboard shortcuts.",
        details: ["System-wide shortcuts", "Accessibility permissions", "Background operation"],
    },
    Feature {
        icon: "🖱",
        title: "System Tray Integration",
        description: "Seamless integration with macOS system tray for easy access.",
        details: ["Tray icon support", "Right-click menu", "Auto-start with system"],
    },
];

pub struct FaqItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub solutions: [&'static str; 4],
}

pub const FAQ_ITEMS: [FaqItem; 4] = [
    FaqItem {
        icon: "🛡",
        title: "Tray Icon Not Visible",
        description: "The system tray icon isn't showing up in the menu bar.",
        solutions: [
            "Enable tray icon from app settings menu",
            "Check macOS menu bar preferences in System Preferences",
            "Restart the application to refresh tray integration",
            "Ensure the app has proper permissions",
        ],
    },
    FaqItem {
        icon: "↺",
        title: "Reset Clipboard History",
        description: "Need to clear all saved clipboard items and start fresh.",
        solutions: [
            "Open app menu and select 'Clear History'",
            "Use the clear button in the main window",
            "Restart the app to reset temporary data",
            "Check storage settings to adjust history size",
        ],
    },
    FaqItem {
        icon: "⟳",
        title: "Auto Start Not Working",
        description: "App doesn't start automatically when you log in to macOS.",
        solutions: [
            "Check login items in macOS System Preferences",
            "Enable auto-start in Smart Clipboard settings",
            "Verify app permissions in Security & Privacy",
            "Reinstall the app if the issue persists",
        ],
    },
    FaqItem {
        icon: "⚙",
        title: "Global Shortcuts Not Working",
        description: "Keyboard shortcuts like Cmd+Option+V aren't responding.",
        solutions: [
            "Grant accessibility permissions in System Preferences",
            "Check for conflicting shortcuts from other apps",
            "Restart the app to refresh shortcut registration",
            "Verify shortcuts in app settings menu",
        ],
    },
];

/// (title, body) pairs for the "Why Contribute?" column
pub const WHY_CONTRIBUTE: [(&str, &str); 3] = [
    (
        "Improve Your Skills",
        "Work with Electron, Node.js, and modern web technologies in a real-world project.",
    ),
    (
        "Join the Community",
        "Connect with other developers and help shape the future of productivity tools.",
    ),
    (
        "Make a Difference",
        "Help thousands of developers and professionals boost their productivity.",
    ),
];

pub const CONTRIBUTE_STEPS: [(&str, &str); 3] = [
    ("Fork the Repository", "Create your own copy of the project to start contributing."),
    ("Create a Feature Branch", "Work on your improvements in a dedicated branch."),
    ("Submit a Pull Request", "Share your changes with the community for review and integration."),
];

/// (label, url) pairs for the footer resources column
pub const RESOURCES: [(&str, &str); 4] = [
    ("Download", RELEASES_URL),
    ("GitHub Repository", REPO_URL),
    ("Report Issues", ISSUES_URL),
    ("Documentation", DOCS_URL),
];

pub const FOOTER_BLURB: &str = "A powerful, open-source clipboard manager that enhances your copy-paste \
workflow with intelligent features and beautiful themes.";

pub const COPYRIGHT: &str = "© 2025 Smart Clipboard. Open source under MIT License.";
