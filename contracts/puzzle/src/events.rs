use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const NEW_PUZZLE: Symbol = symbol_short!("new_pzl");
pub const FINISHED: Symbol = symbol_short!("finished");
pub const MINT: Symbol = symbol_short!("mint");
pub const TRANSFER: Symbol = symbol_short!("transfer");
pub const BURN: Symbol = symbol_short!("burn");
pub const APPROVE: Symbol = symbol_short!("approve");
pub const OPERATOR: Symbol = symbol_short!("operator");
pub const PRICE: Symbol = symbol_short!("price");
pub const ACTIVE: Symbol = symbol_short!("active");

pub fn new_puzzle_added(env: &Env, owner: &Address, puzzle_id: u32) {
    env.events().publish((NEW_PUZZLE, owner.clone()), puzzle_id);
}

pub fn puzzle_finished(env: &Env, owner: &Address, puzzle_id: u32) {
    env.events().publish((FINISHED, owner.clone()), puzzle_id);
}

pub fn minted(env: &Env, to: &Address, token_id: u64) {
    env.events().publish((MINT, to.clone()), token_id);
}

pub fn transferred(env: &Env, from: &Address, to: &Address, token_id: u64) {
    env.events().publish((TRANSFER, from.clone(), to.clone()), token_id);
}

pub fn burned(env: &Env, owner: &Address, token_id: u64) {
    env.events().publish((BURN, owner.clone()), token_id);
}

pub fn approved(env: &Env, owner: &Address, approved: &Option<Address>, token_id: u64) {
    env.events().publish((APPROVE, owner.clone()), (token_id, approved.clone()));
}

pub fn operator_set(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    env.events().publish((OPERATOR, owner.clone(), operator.clone()), approved);
}

pub fn price_changed(env: &Env, puzzle_id: u32, price: i128) {
    env.events().publish((PRICE, puzzle_id), price);
}

pub fn activation_changed(env: &Env, puzzle_id: u32, active: bool) {
    env.events().publish((ACTIVE, puzzle_id), active);
}
