#![warn(clippy::uninlined_format_args)]

#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const PERCENT_SUM_NOT_100: &str = "割合の合計が残額の100%になっていません";
    pub const EQUAL_WITH_PERCENTAGES: &str = "割合指定と均等割りは同時に使えません";
    pub const FIXED_EXCEEDS_TOTAL: &str = "固定額の合計が支出の総額を超えています";
    pub const DUPLICATE_PARTICIPANTS: &str = "参加者が重複しています";
    pub const TOO_MANY_PARTICIPANTS: &str = "グループの人数より多くの割り当てがあります";
    pub const ALLOCATED_EXCEEDS_TOTAL: &str = "割り当ての合計が支出の総額を超えています";
    pub const MISSING_PAYER: &str = "支払者を選択してください";
    pub const EXPENSE_CREATION_FAILED: &str = "支出の登録に失敗しました";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const PERCENT_SUM_NOT_100: &str = "Percentages must total 100% of the remainder";
    pub const EQUAL_WITH_PERCENTAGES: &str =
        "Equal splits cannot be combined with percentage shares";
    pub const FIXED_EXCEEDS_TOTAL: &str = "Fixed amounts exceed the expense total";
    pub const DUPLICATE_PARTICIPANTS: &str = "Duplicate participants are not allowed";
    pub const TOO_MANY_PARTICIPANTS: &str = "More shares than members in the group";
    pub const ALLOCATED_EXCEEDS_TOTAL: &str = "Allocated shares exceed the expense total";
    pub const MISSING_PAYER: &str = "Select who paid the expense";
    pub const EXPENSE_CREATION_FAILED: &str = "Failed to create the expense";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const PERCENT_SUM_NOT_100: &str = "Percentages must total 100% of the remainder";
    pub const EQUAL_WITH_PERCENTAGES: &str =
        "Equal splits cannot be combined with percentage shares";
    pub const FIXED_EXCEEDS_TOTAL: &str = "Fixed amounts exceed the expense total";
    pub const DUPLICATE_PARTICIPANTS: &str = "Duplicate participants are not allowed";
    pub const TOO_MANY_PARTICIPANTS: &str = "More shares than members in the group";
    pub const ALLOCATED_EXCEEDS_TOTAL: &str = "Allocated shares exceed the expense total";
    pub const MISSING_PAYER: &str = "Select who paid the expense";
    pub const EXPENSE_CREATION_FAILED: &str = "Failed to create the expense";
}

pub use strings::*;

pub fn expense_creation_failed(status: u16, message: impl std::fmt::Display) -> String {
    format!("{EXPENSE_CREATION_FAILED} ({status}): {message}")
}
