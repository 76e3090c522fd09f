//! Tag table, from EMV Book 3 Annex A and Book 4 data element listings

use super::TagInfo;
use super::ValueFormat::{Alphanumeric, Binary, CompressedNumeric, Numeric};

/// Sorted by tag
pub(super) static TAGS: &[TagInfo] = &[
    TagInfo::new(0x42, "Issuer Identification Number (IIN)", Numeric, false),
    TagInfo::new(0x4F, "Application Dedicated File (ADF) Name", Binary, false),
    TagInfo::new(0x50, "Application Label", Alphanumeric, false),
    TagInfo::new(0x56, "Track 1 Data", Alphanumeric, false),
    TagInfo::new(0x57, "Track 2 Equivalent Data", Binary, false),
    TagInfo::new(0x5A, "Application Primary Account Number (PAN)", CompressedNumeric, false),
    TagInfo::new(0x61, "Application Template", Binary, true),
    TagInfo::new(0x6F, "File Control Information (FCI) Template", Binary, true),
    TagInfo::new(0x70, "READ RECORD Response Message Template", Binary, true),
    TagInfo::new(0x71, "Issuer Script Template 1", Binary, true),
    TagInfo::new(0x72, "Issuer Script Template 2", Binary, true),
    TagInfo::new(0x73, "Directory Discretionary Template", Binary, true),
    TagInfo::new(0x77, "Response Message Template Format 2", Binary, true),
    TagInfo::new(0x80, "Response Message Template Format 1", Binary, false),
    TagInfo::new(0x81, "Amount, Authorised (Binary)", Binary, false),
    TagInfo::new(0x82, "Application Interchange Profile", Binary, false),
    TagInfo::new(0x83, "Command Template", Binary, false),
    TagInfo::new(0x84, "Dedicated File (DF) Name", Binary, false),
    TagInfo::new(0x86, "Issuer Script Command", Binary, false),
    TagInfo::new(0x87, "Application Priority Indicator", Binary, false),
    TagInfo::new(0x88, "Short File Identifier (SFI)", Binary, false),
    TagInfo::new(0x89, "Authorisation Code", Alphanumeric, false),
    TagInfo::new(0x8A, "Authorisation Response Code", Alphanumeric, false),
    TagInfo::new(0x8C, "Card Risk Management Data Object List 1 (CDOL1)", Binary, false),
    TagInfo::new(0x8D, "Card Risk Management Data Object List 2 (CDOL2)", Binary, false),
    TagInfo::new(0x8E, "Cardholder Verification Method (CVM) List", Binary, false),
    TagInfo::new(0x8F, "Certification Authority Public Key Index", Binary, false),
    TagInfo::new(0x90, "Issuer Public Key Certificate", Binary, false),
    TagInfo::new(0x91, "Issuer Authentication Data", Binary, false),
    TagInfo::new(0x92, "Issuer Public Key Remainder", Binary, false),
    TagInfo::new(0x93, "Signed Static Application Data", Binary, false),
    TagInfo::new(0x94, "Application File Locator (AFL)", Binary, false),
    TagInfo::new(0x95, "Terminal Verification Results", Binary, false),
    TagInfo::new(0x97, "Transaction Certificate Data Object List (TDOL)", Binary, false),
    TagInfo::new(0x98, "Transaction Certificate (TC) Hash Value", Binary, false),
    TagInfo::new(0x99, "Transaction Personal Identification Number (PIN) Data", Binary, false),
    TagInfo::new(0x9A, "Transaction Date", Numeric, false),
    TagInfo::new(0x9B, "Transaction Status Information", Binary, false),
    TagInfo::new(0x9C, "Transaction Type", Numeric, false),
    TagInfo::new(0x9D, "Directory Definition File (DDF) Name", Binary, false),
    TagInfo::new(0xA5, "File Control Information (FCI) Proprietary Template", Binary, true),
    TagInfo::new(0x5F20, "Cardholder Name", Alphanumeric, false),
    TagInfo::new(0x5F24, "Application Expiration Date", Numeric, false),
    TagInfo::new(0x5F25, "Application Effective Date", Numeric, false),
    TagInfo::new(0x5F28, "Issuer Country Code", Numeric, false),
    TagInfo::new(0x5F2A, "Transaction Currency Code", Numeric, false),
    TagInfo::new(0x5F2D, "Language Preference", Alphanumeric, false),
    TagInfo::new(0x5F30, "Service Code", Numeric, false),
    TagInfo::new(0x5F34, "Application Primary Account Number (PAN) Sequence Number", Numeric, false),
    TagInfo::new(0x5F36, "Transaction Currency Exponent", Numeric, false),
    TagInfo::new(0x5F50, "Issuer URL", Alphanumeric, false),
    TagInfo::new(0x5F53, "International Bank Account Number (IBAN)", Binary, false),
    TagInfo::new(0x5F54, "Bank Identifier Code (BIC)", Alphanumeric, false),
    TagInfo::new(0x5F55, "Issuer Country Code (alpha2 format)", Alphanumeric, false),
    TagInfo::new(0x5F56, "Issuer Country Code (alpha3 format)", Alphanumeric, false),
    TagInfo::new(0x9F01, "Acquirer Identifier", Numeric, false),
    TagInfo::new(0x9F02, "Amount, Authorised (Numeric)", Numeric, false),
    TagInfo::new(0x9F03, "Amount, Other (Numeric)", Numeric, false),
    TagInfo::new(0x9F04, "Amount, Other (Binary)", Binary, false),
    TagInfo::new(0x9F05, "Application Discretionary Data", Binary, false),
    TagInfo::new(0x9F06, "Application Identifier (AID) - terminal", Binary, false),
    TagInfo::new(0x9F07, "Application Usage Control", Binary, false),
    TagInfo::new(0x9F08, "Application Version Number (card)", Binary, false),
    TagInfo::new(0x9F09, "Application Version Number (terminal)", Binary, false),
    TagInfo::new(0x9F0B, "Cardholder Name Extended", Alphanumeric, false),
    TagInfo::new(0x9F0D, "Issuer Action Code - Default", Binary, false),
    TagInfo::new(0x9F0E, "Issuer Action Code - Denial", Binary, false),
    TagInfo::new(0x9F0F, "Issuer Action Code - Online", Binary, false),
    TagInfo::new(0x9F10, "Issuer Application Data", Binary, false),
    TagInfo::new(0x9F11, "Issuer Code Table Index", Numeric, false),
    TagInfo::new(0x9F12, "Application Preferred Name", Alphanumeric, false),
    TagInfo::new(0x9F13, "Last Online Application Transaction Counter (ATC) Register", Binary, false),
    TagInfo::new(0x9F14, "Lower Consecutive Offline Limit", Binary, false),
    TagInfo::new(0x9F15, "Merchant Category Code", Numeric, false),
    TagInfo::new(0x9F16, "Merchant Identifier", Alphanumeric, false),
    TagInfo::new(0x9F17, "Personal Identification Number (PIN) Try Counter", Binary, false),
    TagInfo::new(0x9F18, "Issuer Script Identifier", Binary, false),
    TagInfo::new(0x9F1A, "Terminal Country Code", Numeric, false),
    TagInfo::new(0x9F1B, "Terminal Floor Limit", Binary, false),
    TagInfo::new(0x9F1C, "Terminal Identification", Alphanumeric, false),
    TagInfo::new(0x9F1D, "Terminal Risk Management Data", Binary, false),
    TagInfo::new(0x9F1E, "Interface Device (IFD) Serial Number", Alphanumeric, false),
    TagInfo::new(0x9F1F, "Track 1 Discretionary Data", Alphanumeric, false),
    TagInfo::new(0x9F20, "Track 2 Discretionary Data", CompressedNumeric, false),
    TagInfo::new(0x9F21, "Transaction Time", Numeric, false),
    TagInfo::new(0x9F22, "Certification Authority Public Key Index (terminal)", Binary, false),
    TagInfo::new(0x9F23, "Upper Consecutive Offline Limit", Binary, false),
    TagInfo::new(0x9F26, "Application Cryptogram", Binary, false),
    TagInfo::new(0x9F27, "Cryptogram Information Data", Binary, false),
    TagInfo::new(0x9F2D, "ICC PIN Encipherment Public Key Certificate", Binary, false),
    TagInfo::new(0x9F2E, "ICC PIN Encipherment Public Key Exponent", Binary, false),
    TagInfo::new(0x9F2F, "ICC PIN Encipherment Public Key Remainder", Binary, false),
    TagInfo::new(0x9F32, "Issuer Public Key Exponent", Binary, false),
    TagInfo::new(0x9F33, "Terminal Capabilities", Binary, false),
    TagInfo::new(0x9F34, "Cardholder Verification Method (CVM) Results", Binary, false),
    TagInfo::new(0x9F35, "Terminal Type", Numeric, false),
    TagInfo::new(0x9F36, "Application Transaction Counter (ATC)", Binary, false),
    TagInfo::new(0x9F37, "Unpredictable Number", Binary, false),
    TagInfo::new(0x9F38, "Processing Options Data Object List (PDOL)", Binary, false),
    TagInfo::new(0x9F39, "Point-of-Service (POS) Entry Mode", Numeric, false),
    TagInfo::new(0x9F3A, "Amount, Reference Currency", Binary, false),
    TagInfo::new(0x9F3B, "Application Reference Currency", Numeric, false),
    TagInfo::new(0x9F3C, "Transaction Reference Currency Code", Numeric, false),
    TagInfo::new(0x9F3D, "Transaction Reference Currency Exponent", Numeric, false),
    TagInfo::new(0x9F40, "Additional Terminal Capabilities", Binary, false),
    TagInfo::new(0x9F41, "Transaction Sequence Counter", Numeric, false),
    TagInfo::new(0x9F42, "Application Currency Code", Numeric, false),
    TagInfo::new(0x9F43, "Application Reference Currency Exponent", Numeric, false),
    TagInfo::new(0x9F44, "Application Currency Exponent", Numeric, false),
    TagInfo::new(0x9F45, "Data Authentication Code", Binary, false),
    TagInfo::new(0x9F46, "ICC Public Key Certificate", Binary, false),
    TagInfo::new(0x9F47, "ICC Public Key Exponent", Binary, false),
    TagInfo::new(0x9F48, "ICC Public Key Remainder", Binary, false),
    TagInfo::new(0x9F49, "Dynamic Data Authentication Data Object List (DDOL)", Binary, false),
    TagInfo::new(0x9F4A, "Static Data Authentication Tag List", Binary, false),
    TagInfo::new(0x9F4B, "Signed Dynamic Application Data", Binary, false),
    TagInfo::new(0x9F4C, "ICC Dynamic Number", Binary, false),
    TagInfo::new(0x9F4D, "Log Entry", Binary, false),
    TagInfo::new(0x9F4E, "Merchant Name and Location", Alphanumeric, false),
    TagInfo::new(0x9F4F, "Log Format", Binary, false),
    TagInfo::new(0x9F66, "Terminal Transaction Qualifiers (TTQ)", Binary, false),
    TagInfo::new(0x9F6E, "Form Factor Indicator", Binary, false),
    TagInfo::new(0x9F7C, "Customer Exclusive Data", Binary, false),
    TagInfo::new(0xBF0C, "File Control Information (FCI) Issuer Discretionary Data", Binary, true),
];
