#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentFamily {
    Card,
    CreditTransfer,
    DirectDebit,
    Other,
}

/// Payment brands the gateway knows, with the family each belongs to.
pub const BRANDS: &[(&str, PaymentFamily)] = &[
    ("ACCEPTGIRO", PaymentFamily::CreditTransfer),
    ("AMEX", PaymentFamily::Card),
    ("BCMC", PaymentFamily::Card),
    ("BUYSTER", PaymentFamily::Card),
    ("BANK CARD", PaymentFamily::Card),
    ("CB", PaymentFamily::Card),
    ("IDEAL", PaymentFamily::CreditTransfer),
    ("INCASSO", PaymentFamily::DirectDebit),
    ("MAESTRO", PaymentFamily::Card),
    ("MASTERCARD", PaymentFamily::Card),
    ("MASTERPASS", PaymentFamily::Card),
    ("MINITIX", PaymentFamily::Other),
    ("NETBANKING", PaymentFamily::CreditTransfer),
    ("PAYPAL", PaymentFamily::Card),
    ("PAYLIB", PaymentFamily::Card),
    ("REFUND", PaymentFamily::Other),
    ("SDD", PaymentFamily::DirectDebit),
    ("SOFORT", PaymentFamily::CreditTransfer),
    ("VISA", PaymentFamily::Card),
    ("VPAY", PaymentFamily::Card),
    ("VISA ELECTRON", PaymentFamily::Card),
    ("CBCONLINE", PaymentFamily::CreditTransfer),
    ("KBCONLINE", PaymentFamily::CreditTransfer),
];

/// Case-insensitive brand lookup.
pub fn brand_family(brand: &str) -> Option<PaymentFamily> {
    BRANDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(brand))
        .map(|(_, family)| *family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_family() {
        assert_eq!(brand_family("visa"), Some(PaymentFamily::Card));
        assert_eq!(brand_family("Visa Electron"), Some(PaymentFamily::Card));
        assert_eq!(brand_family("SDD"), Some(PaymentFamily::DirectDebit));
        assert_eq!(brand_family("ideal"), Some(PaymentFamily::CreditTransfer));
        assert_eq!(brand_family("minitix"), Some(PaymentFamily::Other));
        assert_eq!(brand_family("DINERS"), None);
    }
}
