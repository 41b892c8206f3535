use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

use crate::errors::Error;
use crate::types::{Config, DataKey, Puzzle, TokenKind};

pub const LEDGER_THRESHOLD_SHARED: u32 = 518_400; // ~30 days @ 5s/ledger
pub const LEDGER_BUMP_SHARED: u32 = 1_036_800; // ~60 days @ 5s/ledger

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

fn set_persistent<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

// ───────────── CONFIG ─────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn write_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// ───────────── PUZZLES ─────────────

pub fn get_puzzle(env: &Env, puzzle_id: u32) -> Option<Puzzle> {
    env.storage().persistent().get(&DataKey::Puzzle(puzzle_id))
}

pub fn read_puzzle(env: &Env, puzzle_id: u32) -> Result<Puzzle, Error> {
    get_puzzle(env, puzzle_id).ok_or(Error::PuzzleNotFound)
}

pub fn write_puzzle(env: &Env, puzzle: &Puzzle) {
    set_persistent(env, &DataKey::Puzzle(puzzle.id), puzzle);
}

pub fn read_minted(env: &Env, owner: &Address, puzzle_id: u32) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Minted(owner.clone(), puzzle_id))
        .unwrap_or(0)
}

pub fn write_minted(env: &Env, owner: &Address, puzzle_id: u32, count: u32) {
    set_persistent(env, &DataKey::Minted(owner.clone(), puzzle_id), &count);
}

// ───────────── TOKENS ─────────────

pub fn read_owner(env: &Env, token_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner(token_id))
}

pub fn write_owner(env: &Env, token_id: u64, owner: &Address) {
    set_persistent(env, &DataKey::Owner(token_id), owner);
}

pub fn read_kind(env: &Env, token_id: u64) -> Option<TokenKind> {
    env.storage().persistent().get(&DataKey::Kind(token_id))
}

pub fn write_kind(env: &Env, token_id: u64, kind: &TokenKind) {
    set_persistent(env, &DataKey::Kind(token_id), kind);
}

pub fn read_approved(env: &Env, token_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Approved(token_id))
}

pub fn write_approved(env: &Env, token_id: u64, approved: &Option<Address>) {
    let key = DataKey::Approved(token_id);
    match approved {
        Some(addr) => set_persistent(env, &key, addr),
        None => env.storage().persistent().remove(&key),
    }
}

pub fn remove_token(env: &Env, token_id: u64) {
    let storage = env.storage().persistent();
    storage.remove(&DataKey::Owner(token_id));
    storage.remove(&DataKey::Kind(token_id));
    storage.remove(&DataKey::Approved(token_id));
}

// ───────────── ACCOUNTS ─────────────

pub fn read_balance(env: &Env, owner: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, owner: &Address, balance: u64) {
    set_persistent(env, &DataKey::Balance(owner.clone()), &balance);
}

pub fn read_operator(env: &Env, owner: &Address, operator: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Operator(owner.clone(), operator.clone()))
        .unwrap_or(false)
}

pub fn write_operator(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = DataKey::Operator(owner.clone(), operator.clone());
    if approved {
        set_persistent(env, &key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn read_holdings(env: &Env, owner: &Address, puzzle_id: u32) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::Holdings(owner.clone(), puzzle_id))
        .unwrap_or(Vec::new(env))
}

pub fn write_holdings(env: &Env, owner: &Address, puzzle_id: u32, holdings: &Vec<u64>) {
    let key = DataKey::Holdings(owner.clone(), puzzle_id);
    if holdings.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        set_persistent(env, &key, holdings);
    }
}
