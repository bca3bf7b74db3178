//! Field names accepted in an outbound payment request.

/// Every field a payment request may carry. Dotted names are flat keys.
pub const PSP_FIELDS: &[&str] = &[
    "amount",
    "currencyCode",
    "merchantId",
    "normalReturnUrl",
    "transactionReference",
    "keyVersion",
    "paymentMeanBrand",
    "customerLanguage",
    "billingAddress.city",
    "billingAddress.company",
    "billingAddress.country",
    "billingAddress",
    "billingAddress.postBox",
    "billingAddress.state",
    "billingAddress.street",
    "billingAddress.streetNumber",
    "billingAddress.zipCode",
    "billingContact.email",
    "billingContact.firstname",
    "billingContact.gender",
    "billingContact.lastname",
    "billingContact.mobile",
    "billingContact.phone",
    "customerAddress",
    "customerAddress.city",
    "customerAddress.company",
    "customerAddress.country",
    "customerAddress.postBox",
    "customerAddress.state",
    "customerAddress.street",
    "customerAddress.streetNumber",
    "customerAddress.zipCode",
    "customerContact",
    "customerContact.email",
    "customerContact.firstname",
    "customerContact.gender",
    "customerContact.lastname",
    "customerContact.mobile",
    "customerContact.phone",
    "customerContact.title",
    "expirationDate",
    "automaticResponseUrl",
    "templateName",
    "paymentMeanBrandList",
    "instalmentData.number",
    "instalmentData.datesList",
    "instalmentData.transactionReferencesList",
    "instalmentData.amountsList",
    "paymentPattern",
    "captureDay",
    "fraudData.bypass3DS",
    "merchantWalletId",
    "orderId",
];

/// Fields that must be present and non-empty before a request can be sealed.
pub const REQUIRED_FIELDS: &[&str] = &[
    "amount",
    "currencyCode",
    "merchantId",
    "normalReturnUrl",
    "transactionReference",
    "keyVersion",
];

/// Fields written only through a dedicated, validating setter.
pub const VALIDATED_FIELDS: &[&str] = &[
    "amount",
    "currencyCode",
    "transactionReference",
    "customerLanguage",
    "paymentMeanBrandList",
    "customerContact.email",
    "billingContact.email",
    "billingAddress.street",
    "billingAddress.streetNumber",
    "billingAddress.zipCode",
    "billingAddress.city",
    "billingContact.firstname",
    "billingContact.lastname",
    "billingContact.phone",
    "captureDay",
    "instalmentData.number",
    "fraudData.bypass3DS",
    "merchantWalletId",
    "normalReturnUrl",
    "automaticResponseUrl",
];

pub const ALLOWED_LANGUAGES: &[&str] = &["nl", "fr", "de", "it", "es", "cy", "en"];

pub fn is_known_field(name: &str) -> bool {
    PSP_FIELDS.contains(&name)
}

pub fn has_dedicated_setter(name: &str) -> bool {
    VALIDATED_FIELDS.contains(&name)
}
