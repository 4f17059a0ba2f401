//! Static catalog of gateway error codes and their localized messages
//!
//! The gateway documents a fixed set of JSON-RPC error codes, each with a
//! Russian, Uzbek and English message. This module holds that table as an
//! immutable `static`, sorted by code so lookups are a binary search.
//!
//! # Lookup Rules
//!
//! [`lookup`] is total over every `(code, lang)` pair:
//!
//! 1. known code, known language → that message
//! 2. known code, unknown language → the English message
//! 3. unknown code → [`UNKNOWN_ERROR`]
//!
//! # Examples
//!
//! ```rust
//! use paycom_core::catalog;
//!
//! assert_eq!(catalog::lookup(-31003, "uz"), "To'lov topilmadi");
//! assert_eq!(catalog::lookup(-31003, "fr"), "Transaction not found");
//! assert_eq!(catalog::lookup(999999, "en"), catalog::UNKNOWN_ERROR);
//! ```

use std::fmt;
use std::str::FromStr;

/// Language used when the requested one is missing
pub const DEFAULT_LANG: &str = "en";

/// Message returned for codes that are not in the catalog
pub const UNKNOWN_ERROR: &str = "Unknown error code.";

// General errors
/// Request was not sent with POST
pub const METHOD_NOT_POST: i32 = -32300;
/// Request body is not valid JSON
pub const JSON_PARSE_ERROR: i32 = -32700;
/// Required RPC fields are missing
pub const INVALID_RPC_FIELDS: i32 = -32600;
/// Wire method is unknown
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Credentials lack the privileges for the method
pub const INSUFFICIENT_PRIVILEGES: i32 = -32504;
/// Internal failure on the gateway side
pub const SYSTEM_ERROR: i32 = -32400;

// Merchant server errors
/// Amount does not match the order
pub const INVALID_AMOUNT: i32 = -31001;
/// Transaction does not exist
pub const TRANSACTION_NOT_FOUND: i32 = -31003;
/// Transaction is already performed and cannot be cancelled
pub const TRANSACTION_NOT_CANCELABLE: i32 = -31007;
/// Operation is not allowed in the transaction's current state
pub const OPERATION_NOT_ALLOWED: i32 = -31008;
/// First code of the user-input (account) error range, counting down
pub const USER_INPUT_ERROR_MIN: i32 = -31050;
/// Last code of the user-input (account) error range, counting down
pub const USER_INPUT_ERROR_MAX: i32 = -31099;

/// Returns true if `code` lies in the account-validation range -31050 down to -31099
pub fn is_user_input_error(code: i32) -> bool {
    (USER_INPUT_ERROR_MAX..=USER_INPUT_ERROR_MIN).contains(&code)
}

/// A language the catalog carries messages for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    /// Russian
    Ru,
    /// Uzbek
    Uz,
    /// English
    En,
}

impl Lang {
    /// The language tag used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::Uz => "uz",
            Lang::En => "en",
        }
    }

    /// Exact wire tag match (`"ru"`, `"uz"`, `"en"`)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ru" => Some(Lang::Ru),
            "uz" => Some(Lang::Uz),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = ();

    /// Case-insensitive; unknown tags are rejected so callers can fall back
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ru" => Ok(Lang::Ru),
            "uz" => Ok(Lang::Uz),
            "en" => Ok(Lang::En),
            _ => Err(()),
        }
    }
}

/// One catalog row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Gateway error code
    pub code: i32,
    /// Russian message
    pub ru: &'static str,
    /// Uzbek message
    pub uz: &'static str,
    /// English message
    pub en: &'static str,
}

impl CatalogEntry {
    /// Message in the given language
    pub fn message(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ru => self.ru,
            Lang::Uz => self.uz,
            Lang::En => self.en,
        }
    }
}

const fn entry_of(code: i32, ru: &'static str, uz: &'static str, en: &'static str) -> CatalogEntry {
    CatalogEntry { code, ru, uz, en }
}

// Sorted ascending by code for binary search.
static CATALOG: [CatalogEntry; 16] = [
    entry_of(-32700, "Ошибка парсинга JSON", "Ошибка парсинга JSON", "Error parsing JSON"),
    entry_of(
        -32601,
        "Запрашиваемый метод не найден",
        "Запрашиваемый метод не найден",
        "The requested method was not found",
    ),
    entry_of(
        -32600,
        "Отсутствуют обязательные поля в RPC-запросе",
        "Отсутствуют обязательные поля в RPC-запросе",
        "Required fields are missing in the RPC request",
    ),
    entry_of(
        -32504,
        "Недостаточно привилегий для выполнения метода",
        "Imtiyozlar yetarli emas",
        "Insufficient privileges to execute the method",
    ),
    entry_of(
        -32400,
        "Не удалось обработать запрос. Повторите попытку еще раз",
        "So'rovingizni bajarib bo'lmadi. Qayta urinib ko'ring.",
        "The request could not be processed. Try again.",
    ),
    entry_of(-32300, "Неверный метод запроса", "Неверный метод запроса", "Invalid request method"),
    entry_of(
        -31099,
        "Запрашиваемый поле не найдено",
        "So'ralgan ma'lumot topilmadi",
        "The requested field is not found",
    ),
    entry_of(-31054, "Транзакция отменена", "Транзакция отменена", "Transaction canceled"),
    entry_of(-31053, "В ожидании оплаты", "В ожидании оплаты", "In payment pending"),
    entry_of(
        -31052,
        "Заказ уже оплачен",
        "Заказ уже оплачен",
        "The order has already been paid",
    ),
    entry_of(
        -31051,
        "Введен неверный номер заказа 2",
        "Buyurtma raqami noto'g'ri",
        "Invalid Order ID",
    ),
    entry_of(
        -31050,
        "Введен неверный номер заказа",
        "Buyurtma raqami noto'g'ri",
        "Invalid Order ID",
    ),
    entry_of(
        -31008,
        "Невозможно выполнить операцию",
        "So'rovingizni bajarib bo'lmadi. Qayta urinib ko'ring.",
        "Unable to perform the operation",
    ),
    entry_of(
        -31007,
        "Невозможно отменить транзакцию! Заказ выполнен.",
        "To'lov bekor qila olmaymiz! Xizmar ko'rsatilgan.",
        "Unable to cancel transaction! The order is executed",
    ),
    entry_of(-31003, "Транзакция не найдена", "To'lov topilmadi", "Transaction not found"),
    entry_of(
        -31001,
        "Неверная сумма заказа",
        "To'lov summasi noto'g'ri",
        "Incorrect order amount",
    ),
];

/// All catalog rows, ascending by code
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// The row for `code`, if the gateway documents it
pub fn entry(code: i32) -> Option<&'static CatalogEntry> {
    CATALOG
        .binary_search_by_key(&code, |e| e.code)
        .ok()
        .map(|idx| &CATALOG[idx])
}

/// Localized message for `code`, never failing
///
/// `lang` must be exactly `ru`, `uz` or `en`; any other tag, including
/// `"UZ"`, yields the English message.
pub fn lookup(code: i32, lang: &str) -> &'static str {
    match entry(code) {
        Some(e) => e.message(Lang::from_tag(lang).unwrap_or_default()),
        None => UNKNOWN_ERROR,
    }
}
