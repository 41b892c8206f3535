//! Ownership ledger shared by piece tokens and finished-puzzle tokens.
//!
//! Every function here assumes authorization was already checked by the
//! caller; they only keep owner, balance, approval and per-puzzle holding
//! records consistent with each other.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::events;
use crate::storage;
use crate::types::{Config, TokenKind};

pub fn owner_of(env: &Env, token_id: u64) -> Result<Address, Error> {
    storage::read_owner(env, token_id).ok_or(Error::TokenNotFound)
}

pub fn is_approved_or_owner(env: &Env, spender: &Address, owner: &Address, token_id: u64) -> bool {
    if spender == owner {
        return true;
    }
    if storage::read_approved(env, token_id).as_ref() == Some(spender) {
        return true;
    }
    storage::read_operator(env, owner, spender)
}

/// Mints `count` pieces of a puzzle to `to`. The caller persists `config`.
///
/// Balance and holdings are written once for the whole batch.
pub fn mint_pieces(
    env: &Env,
    config: &mut Config,
    to: &Address,
    puzzle_id: u32,
    count: u32,
) -> Vec<u64> {
    let mut holdings = storage::read_holdings(env, to, puzzle_id);
    let mut token_ids = Vec::new(env);
    for _ in 0..count {
        let token_id = issue(env, config, to, TokenKind::Piece(puzzle_id));
        holdings.push_back(token_id);
        token_ids.push_back(token_id);
    }
    storage::write_holdings(env, to, puzzle_id, &holdings);

    let balance = storage::read_balance(env, to);
    storage::write_balance(env, to, balance + count as u64);

    token_ids
}

/// Mints the finished token of a puzzle to `to`. The caller persists `config`.
pub fn mint_finished(env: &Env, config: &mut Config, to: &Address, puzzle_id: u32) -> u64 {
    let token_id = issue(env, config, to, TokenKind::Finished(puzzle_id));
    let balance = storage::read_balance(env, to);
    storage::write_balance(env, to, balance + 1);
    token_id
}

/// Burns the whole piece set `owner` holds for a puzzle. The caller persists `config`.
pub fn burn_pieces(env: &Env, config: &mut Config, owner: &Address, puzzle_id: u32) -> u32 {
    let pieces = storage::read_holdings(env, owner, puzzle_id);
    for token_id in pieces.iter() {
        storage::remove_token(env, token_id);
        events::burned(env, owner, token_id);
    }
    storage::write_holdings(env, owner, puzzle_id, &Vec::new(env));

    let burned = pieces.len();
    let balance = storage::read_balance(env, owner);
    storage::write_balance(env, owner, balance.saturating_sub(burned as u64));
    config.total_supply = config.total_supply.saturating_sub(burned as u64);

    burned
}

/// Moves `token_id` from `from` to `to`, clearing any single-token approval.
pub fn move_token(env: &Env, from: &Address, to: &Address, token_id: u64) -> Result<(), Error> {
    let owner = owner_of(env, token_id)?;
    if owner != *from {
        return Err(Error::NotOwnerNorApproved);
    }
    let kind = storage::read_kind(env, token_id).ok_or(Error::TokenNotFound)?;

    storage::write_approved(env, token_id, &None);

    if from != to {
        let from_balance = storage::read_balance(env, from);
        storage::write_balance(env, from, from_balance.saturating_sub(1));
        let to_balance = storage::read_balance(env, to);
        storage::write_balance(env, to, to_balance + 1);

        if let TokenKind::Piece(puzzle_id) = kind {
            let mut from_holdings = storage::read_holdings(env, from, puzzle_id);
            if let Some(index) = from_holdings.first_index_of(token_id) {
                from_holdings.remove(index);
                storage::write_holdings(env, from, puzzle_id, &from_holdings);
            }
            let mut to_holdings = storage::read_holdings(env, to, puzzle_id);
            to_holdings.push_back(token_id);
            storage::write_holdings(env, to, puzzle_id, &to_holdings);
        }

        storage::write_owner(env, token_id, to);
    }

    events::transferred(env, from, to, token_id);
    Ok(())
}

fn issue(env: &Env, config: &mut Config, to: &Address, kind: TokenKind) -> u64 {
    let token_id = config.next_token_id;
    config.next_token_id += 1;
    config.total_supply += 1;

    storage::write_owner(env, token_id, to);
    storage::write_kind(env, token_id, &kind);

    events::minted(env, to, token_id);
    token_id
}
