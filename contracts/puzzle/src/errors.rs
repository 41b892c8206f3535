use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    PuzzleNotFound = 4,
    SaleNotActive = 5,
    NotEnoughPieces = 6,
    MaxPiecesExceeded = 7,
    InvalidAmount = 8,
    InvalidPrice = 9,
    InvalidPieceCount = 10,
    PuzzleAlreadyFinished = 11,
    IncompletePuzzle = 12,
    TokenNotFound = 13,
    NotOwnerNorApproved = 14,
    ApprovalToCurrentOwner = 15,
    UriTooLong = 16,
}
