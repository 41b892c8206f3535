#![no_std]

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Vec};

mod errors;
mod events;
mod nft;
mod storage;
mod types;
mod uri;

pub use errors::Error;
pub use types::{Config, DataKey, Puzzle, TokenKind};

//
// ──────────────────────────────────────────────────────────
// CONSTANTS
// ──────────────────────────────────────────────────────────
//

pub const DEFAULT_MAX_PIECES_PER_OWNER: u32 = 3;
const NAME: &str = "Puzzle";
const SYMBOL: &str = "PZL";

//
// ──────────────────────────────────────────────────────────
// CONTRACT
// ──────────────────────────────────────────────────────────
//

#[contract]
pub struct PuzzleContract;

#[contractimpl]
impl PuzzleContract {
    // ───────────── INITIALIZATION ─────────────

    /// Initialize the contract.
    ///
    /// # Arguments
    /// * `admin` - Contract owner; the only address allowed to add and configure puzzles
    /// * `payment_token` - Token pieces are paid in
    /// * `base_uri` - Prefix of every token URI without a per-puzzle override
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        base_uri: String,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        uri::validate(&base_uri)?;

        let config = Config {
            admin,
            payment_token,
            base_uri,
            max_pieces_per_owner: DEFAULT_MAX_PIECES_PER_OWNER,
            next_puzzle_id: 0,
            next_token_id: 0,
            total_supply: 0,
        };
        storage::write_config(&env, &config);

        Ok(())
    }

    /// Current contract owner.
    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(storage::read_config(&env)?.admin)
    }

    pub fn transfer_ownership(
        env: Env,
        admin: Address,
        new_admin: Address,
    ) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        config.admin = new_admin.clone();
        storage::write_config(&env, &config);
        log!(&env, "ownership transferred", admin, new_admin);
        Ok(())
    }

    // ───────────── PUZZLE LIFECYCLE ─────────────

    /// Register a new puzzle and open its sale.
    ///
    /// # Arguments
    /// * `uri` - Metadata URI of the finished puzzle token, empty for the base URI
    /// * `total_pieces` - Number of pieces that make up the puzzle
    /// * `price` - Price of a single piece in the payment token
    ///
    /// # Returns
    /// The id of the new puzzle.
    pub fn add_puzzle(
        env: Env,
        admin: Address,
        uri: String,
        total_pieces: u32,
        price: i128,
    ) -> Result<u32, Error> {
        let mut config = Self::require_admin(&env, &admin)?;

        if total_pieces == 0 {
            return Err(Error::InvalidPieceCount);
        }
        if price < 0 {
            return Err(Error::InvalidPrice);
        }
        uri::validate(&uri)?;

        let puzzle_id = config.next_puzzle_id;
        let puzzle = Puzzle {
            id: puzzle_id,
            uri,
            total_pieces,
            price,
            minted: 0,
            active: true,
            finished: false,
        };
        storage::write_puzzle(&env, &puzzle);

        config.next_puzzle_id += 1;
        storage::write_config(&env, &config);

        events::new_puzzle_added(&env, &admin, puzzle_id);
        Ok(puzzle_id)
    }

    /// Buy and mint `count` pieces of a puzzle.
    ///
    /// Pulls exactly `price * count` of the payment token from `buyer`.
    ///
    /// # Errors
    /// - `PuzzleNotFound`: no puzzle with this id
    /// - `InvalidAmount`: `count` is zero or the total cost overflows
    /// - `SaleNotActive`: the puzzle sale is switched off
    /// - `PuzzleAlreadyFinished`: the puzzle was already completed
    /// - `NotEnoughPieces`: fewer than `count` pieces remain
    /// - `MaxPiecesExceeded`: `buyer` would pass the per-address cap
    pub fn find_puzzle_pieces(
        env: Env,
        buyer: Address,
        puzzle_id: u32,
        count: u32,
    ) -> Result<Vec<u64>, Error> {
        buyer.require_auth();

        let mut config = storage::read_config(&env)?;
        let mut puzzle = storage::read_puzzle(&env, puzzle_id)?;

        if count == 0 {
            return Err(Error::InvalidAmount);
        }
        if !puzzle.active {
            return Err(Error::SaleNotActive);
        }
        if puzzle.finished {
            return Err(Error::PuzzleAlreadyFinished);
        }

        let minted = puzzle
            .minted
            .checked_add(count)
            .filter(|m| *m <= puzzle.total_pieces)
            .ok_or(Error::NotEnoughPieces)?;

        let bought = storage::read_minted(&env, &buyer, puzzle_id);
        let bought = bought
            .checked_add(count)
            .filter(|b| *b <= config.max_pieces_per_owner)
            .ok_or(Error::MaxPiecesExceeded)?;

        let cost = puzzle
            .price
            .checked_mul(count as i128)
            .ok_or(Error::InvalidAmount)?;
        if cost > 0 {
            let payment = token::Client::new(&env, &config.payment_token);
            payment.transfer(&buyer, &env.current_contract_address(), &cost);
        }

        let token_ids = nft::mint_pieces(&env, &mut config, &buyer, puzzle_id, count);

        puzzle.minted = minted;
        storage::write_puzzle(&env, &puzzle);
        storage::write_minted(&env, &buyer, puzzle_id, bought);
        storage::write_config(&env, &config);

        Ok(token_ids)
    }

    /// Burn every piece of a puzzle held by `owner` and mint the finished puzzle token.
    ///
    /// # Returns
    /// The id of the finished puzzle token.
    pub fn finish_puzzle(env: Env, owner: Address, puzzle_id: u32) -> Result<u64, Error> {
        owner.require_auth();

        let mut config = storage::read_config(&env)?;
        let mut puzzle = storage::read_puzzle(&env, puzzle_id)?;

        if puzzle.finished {
            return Err(Error::PuzzleAlreadyFinished);
        }

        if storage::read_holdings(&env, &owner, puzzle_id).len() != puzzle.total_pieces {
            return Err(Error::IncompletePuzzle);
        }
        nft::burn_pieces(&env, &mut config, &owner, puzzle_id);

        puzzle.finished = true;
        storage::write_puzzle(&env, &puzzle);

        let token_id = nft::mint_finished(&env, &mut config, &owner, puzzle_id);
        storage::write_config(&env, &config);

        log!(&env, "puzzle finished", puzzle_id, owner, token_id);
        events::puzzle_finished(&env, &owner, puzzle_id);
        Ok(token_id)
    }

    // ───────────── ADMIN FUNCTIONS ─────────────

    pub fn set_puzzle_price(
        env: Env,
        admin: Address,
        puzzle_id: u32,
        price: i128,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        if price < 0 {
            return Err(Error::InvalidPrice);
        }

        let mut puzzle = storage::read_puzzle(&env, puzzle_id)?;
        puzzle.price = price;
        storage::write_puzzle(&env, &puzzle);

        events::price_changed(&env, puzzle_id, price);
        Ok(())
    }

    /// Open or close the sale of a puzzle's pieces.
    pub fn activate_puzzle(
        env: Env,
        admin: Address,
        puzzle_id: u32,
        active: bool,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;

        let mut puzzle = storage::read_puzzle(&env, puzzle_id)?;
        puzzle.active = active;
        storage::write_puzzle(&env, &puzzle);

        events::activation_changed(&env, puzzle_id, active);
        Ok(())
    }

    /// Set the finished-token URI of a puzzle. An empty string clears the override.
    pub fn set_puzzle_uri(
        env: Env,
        admin: Address,
        puzzle_id: u32,
        uri: String,
    ) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        uri::validate(&uri)?;

        let mut puzzle = storage::read_puzzle(&env, puzzle_id)?;
        puzzle.uri = uri;
        storage::write_puzzle(&env, &puzzle);
        Ok(())
    }

    pub fn set_max_pieces_per_owner(env: Env, admin: Address, max: u32) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        config.max_pieces_per_owner = max;
        storage::write_config(&env, &config);
        log!(&env, "max pieces per owner", max);
        Ok(())
    }

    pub fn set_base_uri(env: Env, admin: Address, base_uri: String) -> Result<(), Error> {
        let mut config = Self::require_admin(&env, &admin)?;
        uri::validate(&base_uri)?;
        config.base_uri = base_uri;
        storage::write_config(&env, &config);
        Ok(())
    }

    /// Send all collected sale proceeds to `to`.
    ///
    /// # Returns
    /// The amount withdrawn.
    pub fn withdraw(env: Env, admin: Address, to: Address) -> Result<i128, Error> {
        let config = Self::require_admin(&env, &admin)?;

        let payment = token::Client::new(&env, &config.payment_token);
        let contract = env.current_contract_address();
        let amount = payment.balance(&contract);
        if amount > 0 {
            payment.transfer(&contract, &to, &amount);
        }

        log!(&env, "proceeds withdrawn", to, amount);
        Ok(amount)
    }

    // ───────────── TOKEN FUNCTIONS ─────────────

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn balance_of(env: Env, owner: Address) -> u64 {
        storage::read_balance(&env, &owner)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        nft::owner_of(&env, token_id)
    }

    pub fn total_supply(env: Env) -> u64 {
        storage::read_config(&env)
            .map(|config| config.total_supply)
            .unwrap_or(0)
    }

    /// Transfer a token owned by `from`.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();
        storage::bump_instance(&env);
        nft::move_token(&env, &from, &to, token_id)
    }

    /// Transfer a token on behalf of its owner, using `spender`'s approval.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();
        storage::bump_instance(&env);

        let owner = nft::owner_of(&env, token_id)?;
        if owner != from || !nft::is_approved_or_owner(&env, &spender, &owner, token_id) {
            return Err(Error::NotOwnerNorApproved);
        }
        nft::move_token(&env, &from, &to, token_id)
    }

    /// Allow `approved` to transfer a single token; `None` revokes the approval.
    pub fn approve(
        env: Env,
        approver: Address,
        approved: Option<Address>,
        token_id: u64,
    ) -> Result<(), Error> {
        approver.require_auth();
        storage::bump_instance(&env);

        let owner = nft::owner_of(&env, token_id)?;
        if approver != owner && !storage::read_operator(&env, &owner, &approver) {
            return Err(Error::NotOwnerNorApproved);
        }
        if approved.as_ref() == Some(&owner) {
            return Err(Error::ApprovalToCurrentOwner);
        }

        storage::write_approved(&env, token_id, &approved);
        events::approved(&env, &owner, &approved, token_id);
        Ok(())
    }

    pub fn get_approved(env: Env, token_id: u64) -> Result<Option<Address>, Error> {
        nft::owner_of(&env, token_id)?;
        Ok(storage::read_approved(&env, token_id))
    }

    /// Grant or revoke `operator` control over every token of `owner`.
    pub fn set_approval_for_all(
        env: Env,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), Error> {
        owner.require_auth();
        storage::bump_instance(&env);
        if owner == operator {
            return Err(Error::ApprovalToCurrentOwner);
        }

        storage::write_operator(&env, &owner, &operator, approved);
        events::operator_set(&env, &owner, &operator, approved);
        Ok(())
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        storage::read_operator(&env, &owner, &operator)
    }

    /// Metadata URI of a token.
    ///
    /// Finished puzzle tokens resolve to their puzzle's URI when one is set;
    /// everything else resolves to the base URI followed by the token id.
    pub fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        let kind = storage::read_kind(&env, token_id).ok_or(Error::TokenNotFound)?;
        let config = storage::read_config(&env)?;

        if let TokenKind::Finished(puzzle_id) = kind {
            if let Some(puzzle) = storage::get_puzzle(&env, puzzle_id) {
                if puzzle.uri.len() > 0 {
                    return Ok(puzzle.uri);
                }
            }
        }

        Ok(uri::with_token_id(&env, &config.base_uri, token_id))
    }

    // ───────────── VIEW FUNCTIONS ─────────────

    pub fn get_puzzle(env: Env, puzzle_id: u32) -> Option<Puzzle> {
        storage::get_puzzle(&env, puzzle_id)
    }

    pub fn puzzle_count(env: Env) -> u32 {
        storage::read_config(&env)
            .map(|config| config.next_puzzle_id)
            .unwrap_or(0)
    }

    pub fn token_kind(env: Env, token_id: u64) -> Option<TokenKind> {
        storage::read_kind(&env, token_id)
    }

    /// Piece tokens of a puzzle currently held by `owner`.
    pub fn pieces_of(env: Env, owner: Address, puzzle_id: u32) -> Vec<u64> {
        storage::read_holdings(&env, &owner, puzzle_id)
    }

    /// Pieces of a puzzle bought by `owner`, counted against the per-address cap.
    pub fn minted_by(env: Env, owner: Address, puzzle_id: u32) -> u32 {
        storage::read_minted(&env, &owner, puzzle_id)
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        storage::read_config(&env)
    }

    // ───────────── INTERNAL HELPERS ─────────────

    fn require_admin(env: &Env, admin: &Address) -> Result<Config, Error> {
        admin.require_auth();
        let config = storage::read_config(env)?;
        if config.admin != *admin {
            return Err(Error::NotAuthorized);
        }
        storage::bump_instance(env);
        Ok(config)
    }
}
