/// An OpenGrid ASCII art banner for the status screen.
pub const STATUS_BANNER: [&str; 8] = [
    "",
    " 000  0000  00000 0   0  000  0000  00000 0000 ",
    "0   0 0   0 0     00  0 0     0   0   0   0   0",
    "0   0 0000  000   0 0 0 0 000 0000    0   0   0",
    "0   0 0     0     0  00 0   0 0  0    0   0   0",
    " 000  0     00000 0   0  000  0   0 00000 0000 ",
    "",
    VERSION,
];

/// Body of a well-formed `/identity/` reply.
pub const GRID_IDENTITY: &str = "OpenGrid";

/// Name shown for an online node.
// TODO: replace with a node-reported name once /identity/ carries one
pub const PLACEHOLDER_NODE_NAME: &str = "Bob";

/// Version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
