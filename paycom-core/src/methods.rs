//! Wire method registries
//!
//! Each gateway operation is identified inside the request body by a method
//! string. The two API families use different naming schemes:
//!
//! - Merchant API: PascalCase (`CreateTransaction`)
//! - Subscribe API: dotted snake case (`receipts.pay`)
//!
//! Both registries are closed enums so a typo in a method name is a compile
//! error rather than a `-32601` from the gateway.

use std::fmt;

/// Merchant API methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MerchantMethod {
    CheckPerformTransaction,
    CreateTransaction,
    PerformTransaction,
    CancelTransaction,
    CheckTransaction,
    GetStatement,
    SetFiscalData,
}

impl MerchantMethod {
    /// Every merchant method, in documentation order
    pub const ALL: [MerchantMethod; 7] = [
        MerchantMethod::CheckPerformTransaction,
        MerchantMethod::CreateTransaction,
        MerchantMethod::PerformTransaction,
        MerchantMethod::CancelTransaction,
        MerchantMethod::CheckTransaction,
        MerchantMethod::GetStatement,
        MerchantMethod::SetFiscalData,
    ];

    /// The method string sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            MerchantMethod::CheckPerformTransaction => "CheckPerformTransaction",
            MerchantMethod::CreateTransaction => "CreateTransaction",
            MerchantMethod::PerformTransaction => "PerformTransaction",
            MerchantMethod::CancelTransaction => "CancelTransaction",
            MerchantMethod::CheckTransaction => "CheckTransaction",
            MerchantMethod::GetStatement => "GetStatement",
            MerchantMethod::SetFiscalData => "SetFiscalData",
        }
    }
}

impl fmt::Display for MerchantMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subscribe API methods
///
/// `cards.create`, `cards.get_verify_code` and `cards.verify` are meant to be
/// callable from the front end with the cash-register id alone; the rest
/// need the secret key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscribeMethod {
    CardsCreate,
    CardsGetVerifyCode,
    CardsVerify,
    CardsCheck,
    CardsRemove,
    ReceiptsCreate,
    ReceiptsPay,
    ReceiptsSend,
    ReceiptsCancel,
    ReceiptsCheck,
    ReceiptsGet,
    ReceiptsGetAll,
    ReceiptsSetFiscalData,
    ReceiptsConfirmHold,
}

impl SubscribeMethod {
    /// Every subscribe method, in documentation order
    pub const ALL: [SubscribeMethod; 14] = [
        SubscribeMethod::CardsCreate,
        SubscribeMethod::CardsGetVerifyCode,
        SubscribeMethod::CardsVerify,
        SubscribeMethod::CardsCheck,
        SubscribeMethod::CardsRemove,
        SubscribeMethod::ReceiptsCreate,
        SubscribeMethod::ReceiptsPay,
        SubscribeMethod::ReceiptsSend,
        SubscribeMethod::ReceiptsCancel,
        SubscribeMethod::ReceiptsCheck,
        SubscribeMethod::ReceiptsGet,
        SubscribeMethod::ReceiptsGetAll,
        SubscribeMethod::ReceiptsSetFiscalData,
        SubscribeMethod::ReceiptsConfirmHold,
    ];

    /// The method string sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscribeMethod::CardsCreate => "cards.create",
            SubscribeMethod::CardsGetVerifyCode => "cards.get_verify_code",
            SubscribeMethod::CardsVerify => "cards.verify",
            SubscribeMethod::CardsCheck => "cards.check",
            SubscribeMethod::CardsRemove => "cards.remove",
            SubscribeMethod::ReceiptsCreate => "receipts.create",
            SubscribeMethod::ReceiptsPay => "receipts.pay",
            SubscribeMethod::ReceiptsSend => "receipts.send",
            SubscribeMethod::ReceiptsCancel => "receipts.cancel",
            SubscribeMethod::ReceiptsCheck => "receipts.check",
            SubscribeMethod::ReceiptsGet => "receipts.get",
            SubscribeMethod::ReceiptsGetAll => "receipts.get_all",
            SubscribeMethod::ReceiptsSetFiscalData => "receipts.set_fiscal_data",
            SubscribeMethod::ReceiptsConfirmHold => "receipts.confirm_hold",
        }
    }

    /// Whether the method can be called with the cash-register id alone
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            SubscribeMethod::CardsCreate
                | SubscribeMethod::CardsGetVerifyCode
                | SubscribeMethod::CardsVerify
        )
    }
}

impl fmt::Display for SubscribeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_merchant_wire_names() {
        assert_eq!(MerchantMethod::CreateTransaction.as_str(), "CreateTransaction");
        assert_eq!(MerchantMethod::SetFiscalData.to_string(), "SetFiscalData");
    }

    #[test]
    fn test_subscribe_wire_names() {
        assert_eq!(SubscribeMethod::CardsCreate.as_str(), "cards.create");
        assert_eq!(SubscribeMethod::ReceiptsGetAll.as_str(), "receipts.get_all");
        assert_eq!(SubscribeMethod::ReceiptsConfirmHold.as_str(), "receipts.confirm_hold");
    }

    #[test]
    fn test_wire_names_are_unique() {
        let merchant: HashSet<_> = MerchantMethod::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(merchant.len(), MerchantMethod::ALL.len());

        let subscribe: HashSet<_> = SubscribeMethod::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(subscribe.len(), SubscribeMethod::ALL.len());
    }

    #[test]
    fn test_client_side_methods() {
        let client_side: Vec<_> = SubscribeMethod::ALL
            .iter()
            .filter(|m| m.is_client_side())
            .map(|m| m.as_str())
            .collect();
        assert_eq!(client_side, vec!["cards.create", "cards.get_verify_code", "cards.verify"]);
    }
}
