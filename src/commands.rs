//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update,
//! plus the static menu registry the chrome is drawn from.

// ============================================================================
// Menu Registry
// ============================================================================

/// Menu bar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    File,
    Help,
}

/// Actions reachable from the menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    Open,
    Exit,
    Help,
    About,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuItemDef {
    pub command: MenuCommand,
    pub label: &'static str,
    pub keybinding: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuDef {
    pub id: MenuId,
    pub label: &'static str,
    pub items: &'static [MenuItemDef],
}

/// Menus in bar order
pub static MENUS: &[MenuDef] = &[
    MenuDef {
        id: MenuId::File,
        label: "File",
        items: &[
            MenuItemDef {
                command: MenuCommand::Open,
                label: "Open...",
                keybinding: Some("Ctrl+O"),
            },
            MenuItemDef {
                command: MenuCommand::Exit,
                label: "Exit",
                keybinding: Some("Q"),
            },
        ],
    },
    MenuDef {
        id: MenuId::Help,
        label: "Help",
        items: &[
            MenuItemDef {
                command: MenuCommand::Help,
                label: "Contents",
                keybinding: Some("F1"),
            },
            MenuItemDef {
                command: MenuCommand::About,
                label: "About pageview",
                keybinding: None,
            },
        ],
    },
];

/// Look up a menu definition
pub fn menu(id: MenuId) -> &'static MenuDef {
    match id {
        MenuId::File => &MENUS[0],
        MenuId::Help => &MENUS[1],
    }
}

// ============================================================================
// Side-Effect Commands (returned from update)
// ============================================================================

/// Which window edge or corner a resize drag starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    #[default]
    None,
    Redraw,
    /// Run the file picker, then feed the result back as a session message
    ShowOpenDialog,
    /// Start an interactive window move
    DragWindow,
    DragResize(ResizeEdge),
    Quit,
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // The picker result arrives as a message that redraws on its own
            Cmd::ShowOpenDialog => false,
            Cmd::DragWindow | Cmd::DragResize(_) => false,
            Cmd::Quit => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}
