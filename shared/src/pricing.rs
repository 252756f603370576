use crate::forms::FormType;

/// Fee per additional state return, in whole dollars.
pub const STATE_RETURN_FEE: u32 = 150;

/// Federal return fee by form, in whole dollars.
pub fn base_fee(form: FormType) -> u32 {
    match form {
        FormType::SCorp => 500,
        FormType::Partnership => 550,
        FormType::CCorp => 700,
        FormType::Individual => 0,
    }
}

/// State returns bundled into the federal fee.
pub fn included_state_returns(form: FormType) -> usize {
    match form {
        FormType::CCorp => 1,
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeEstimate {
    pub base_fee: u32,
    pub state_count: usize,
    pub state_fee: u32,
    pub total: u32,
}

pub fn estimate(form: FormType, state_count: usize) -> FeeEstimate {
    let billable = state_count.saturating_sub(included_state_returns(form));
    let state_fee = u32::try_from(billable)
        .unwrap_or(u32::MAX)
        .saturating_mul(STATE_RETURN_FEE);
    let base_fee = base_fee(form);
    FeeEstimate {
        base_fee,
        state_count,
        state_fee,
        total: base_fee.saturating_add(state_fee),
    }
}
