//! Shared test fixtures: well-formed payment records for every payment type.
//!
//! Compiled only in test builds.  Integration tests under
//! `crates/payord-core/tests/` keep their own copies because they link
//! against the non-test library build.

use crate::codes::FNS_ACCOUNT;
use crate::enums::PaymentType;
use crate::value::{Field, PaymentRecord};

/// Organisation payer with a valid account/BIC pair.
pub const PAYER_INN: &str = "7707083893";
pub const PAYER_KPP: &str = "770701001";
pub const PAYER_ACCOUNT: &str = "40702810938000000001";
pub const PAYER_BIC: &str = "044525225";

/// Federal Treasury division BIC used for budget payees.
pub const TREASURY_BIC: &str = "017003983";

/// A valid 20-digit UIN.
pub const UIN: &str = "18200000000000001237";

fn payer(pt: PaymentType) -> PaymentRecord {
    PaymentRecord::new()
        .with(Field::PaymentType, pt)
        .with(Field::ForThirdFace, false)
        .with(Field::PayerName, "ООО \"Ромашка\"")
        .with(Field::PayerInn, PAYER_INN)
        .with(Field::PayerKpp, PAYER_KPP)
        .with(Field::PayerAccount, PAYER_ACCOUNT)
        .with(Field::PayerBic, PAYER_BIC)
        .with(Field::OperationKind, "01")
        .with(Field::Priority, 5)
}

/// Unified tax payment by an organisation (status `01`).
pub fn fns_record() -> PaymentRecord {
    payer(PaymentType::Fns)
        .with(Field::PayerStatus, "01")
        .with(Field::PayeeName, "Казначейство России (ФНС России)")
        .with(Field::PayeeInn, "7727406020")
        .with(Field::PayeeKpp, "770801001")
        .with(Field::PayeeAccount, FNS_ACCOUNT)
        .with(Field::PayeeBic, TREASURY_BIC)
        .with(Field::Purpose, "Единый налоговый платеж")
        .with(Field::Cbc, "18201061201010000510")
        .with(Field::Oktmo, "0")
        .with(Field::Uin, "0")
        .with(Field::Reason, "0")
        .with(Field::TaxPeriod, "0")
        .with(Field::DocumentNumber, "0")
        .with(Field::DocumentDate, "0")
}

/// Customs payment by a declarant (status `06`, reason `ПК`).
pub fn customs_record() -> PaymentRecord {
    payer(PaymentType::Customs)
        .with(Field::PayerStatus, "06")
        .with(Field::PayeeName, "Межрегиональное операционное УФК (ФТС России)")
        .with(Field::PayeeInn, "7730176610")
        .with(Field::PayeeKpp, "773001001")
        .with(Field::PayeeAccount, "03100643000000019502")
        .with(Field::PayeeBic, "024501901")
        .with(Field::Purpose, "Авансовые платежи")
        .with(Field::Cbc, "15311009000010000110")
        .with(Field::Oktmo, "45328000")
        .with(Field::Uin, "0")
        .with(Field::Reason, "ПК")
        .with(Field::TaxPeriod, "10000010")
        .with(Field::DocumentNumber, "1234567")
        .with(Field::DocumentDate, "01.02.2024")
}

/// Other budget payment (a state fee) by an individual (status `24`).
pub fn budget_other_record() -> PaymentRecord {
    PaymentRecord::new()
        .with(Field::PaymentType, PaymentType::BudgetOther)
        .with(Field::ForThirdFace, false)
        .with(Field::PayerStatus, "24")
        .with(Field::PayerName, "Иванов Иван Иванович")
        .with(Field::PayerInn, "500100732259")
        .with(Field::PayerAccount, "40817810738000000002")
        .with(Field::PayerBic, PAYER_BIC)
        .with(Field::PayeeName, "УФК по г. Москве (ГУ МВД России по г. Москве)")
        .with(Field::PayeeInn, "7702070139")
        .with(Field::PayeeKpp, "770201001")
        .with(Field::PayeeAccount, "03100643000000017300")
        .with(Field::PayeeBic, "004525988")
        .with(Field::OperationKind, "01")
        .with(Field::Priority, 5)
        .with(Field::Purpose, "Государственная пошлина")
        .with(Field::Cbc, "18810807141011000110")
        .with(Field::Oktmo, "45382000")
        .with(Field::Uin, "0")
        .with(Field::DocumentNumber, "01;4510123456")
}

/// Commercial transfer between organisations.
pub fn le_record() -> PaymentRecord {
    payer(PaymentType::Le)
        .with(Field::PayeeName, "АО \"Поставщик\"")
        .with(Field::PayeeInn, "3664069397")
        .with(Field::PayeeKpp, "366401001")
        .with(Field::PayeeAccount, "40702810700000000001")
        .with(Field::PayeeBic, "044525901")
        .with(Field::Purpose, "Оплата по договору 15")
}

/// Transfer to an individual entrepreneur.
pub fn ip_record() -> PaymentRecord {
    payer(PaymentType::Ip)
        .with(Field::PayeeName, "ИП Петров Петр Петрович")
        .with(Field::PayeeInn, "500100732259")
        .with(Field::PayeeAccount, "40802810438000000003")
        .with(Field::PayeeBic, PAYER_BIC)
        .with(Field::Purpose, "Оплата по счету 7, НДС не облагается")
}

/// Salary transfer to an individual.
pub fn fl_record() -> PaymentRecord {
    payer(PaymentType::Fl)
        .with(Field::PayeeName, "Иванов Иван Иванович")
        .with(Field::PayeeAccount, "40817810738000000002")
        .with(Field::PayeeBic, PAYER_BIC)
        .with(Field::Purpose, "Заработная плата за май")
        .with(Field::PurposeCode, "1")
}
