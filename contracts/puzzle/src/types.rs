use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub payment_token: Address,
    pub base_uri: String,
    pub max_pieces_per_owner: u32,
    pub next_puzzle_id: u32,
    pub next_token_id: u64,
    pub total_supply: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Puzzle {
    pub id: u32,
    /// Metadata URI of the finished puzzle token. Empty means "use the base URI".
    pub uri: String,
    pub total_pieces: u32,
    pub price: i128,
    pub minted: u32,
    pub active: bool,
    pub finished: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Piece(u32),
    Finished(u32),
}

#[contracttype]
pub enum DataKey {
    Config,                    // Instance: Config
    Puzzle(u32),               // Persistent: Puzzle
    Owner(u64),                // Persistent: Address holding a token
    Kind(u64),                 // Persistent: TokenKind
    Approved(u64),             // Persistent: single-token approval
    Balance(Address),          // Persistent: u64
    Operator(Address, Address), // Persistent: (owner, operator) -> bool
    Holdings(Address, u32),    // Persistent: piece ids of a puzzle held by an address
    Minted(Address, u32),      // Persistent: pieces an address bought from a puzzle
}
