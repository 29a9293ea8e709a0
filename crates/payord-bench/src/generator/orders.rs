//! Per-payment-type order builders.
//!
//! Budget orders reuse the payee side of real treasury recipients; the payer
//! side, bank details and free-text numbers are randomized.

use payord_core::{Field, PaymentRecord, PaymentType};
use rand::Rng;
use rand::rngs::StdRng;

use super::identifiers::{
    ENTREPRENEUR_BALANCE, INDIVIDUAL_BALANCE, LEGAL_ENTITY_BALANCE, gen_account, gen_bic,
    gen_inn10, gen_inn12, gen_kpp, gen_uin,
};

const MONTHS: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
    "октябрь", "ноябрь", "декабрь",
];

/// Common header and a legal-entity payer.
fn organisation_payer(rng: &mut StdRng, payment_type: PaymentType) -> PaymentRecord {
    let inn = gen_inn10(rng);
    let bic = gen_bic(rng);
    PaymentRecord::new()
        .with(Field::PaymentType, payment_type)
        .with(Field::ForThirdFace, false)
        .with(Field::PayerName, "ООО \"Ромашка\"")
        .with(Field::PayerKpp, gen_kpp(&inn))
        .with(Field::PayerInn, inn)
        .with(Field::PayerAccount, gen_account(rng, LEGAL_ENTITY_BALANCE, &bic))
        .with(Field::PayerBic, bic)
        .with(Field::OperationKind, "01")
        .with(Field::Priority, 5_i64)
}

fn supplier_invoice(rng: &mut StdRng) -> PaymentRecord {
    let inn = gen_inn10(rng);
    let bic = gen_bic(rng);
    let contract = rng.gen_range(1..10_000u32);
    organisation_payer(rng, PaymentType::Le)
        .with(Field::PayeeName, "АО \"Поставщик\"")
        .with(Field::PayeeKpp, gen_kpp(&inn))
        .with(Field::PayeeInn, inn)
        .with(Field::PayeeAccount, gen_account(rng, LEGAL_ENTITY_BALANCE, &bic))
        .with(Field::PayeeBic, bic)
        .with(Field::Purpose, format!("Оплата по договору {contract}"))
}

fn entrepreneur_invoice(rng: &mut StdRng) -> PaymentRecord {
    let bic = gen_bic(rng);
    let invoice = rng.gen_range(1..10_000u32);
    let vat = if rng.gen_bool(0.5) {
        "НДС не облагается"
    } else {
        "в т.ч. НДС 20%"
    };
    organisation_payer(rng, PaymentType::Ip)
        .with(Field::PayeeName, "ИП Петров Петр Петрович")
        .with(Field::PayeeInn, gen_inn12(rng))
        .with(Field::PayeeAccount, gen_account(rng, ENTREPRENEUR_BALANCE, &bic))
        .with(Field::PayeeBic, bic)
        .with(Field::Purpose, format!("Оплата по счету {invoice}, {vat}"))
}

fn salary(rng: &mut StdRng) -> PaymentRecord {
    let bic = gen_bic(rng);
    let month = MONTHS[rng.gen_range(0..MONTHS.len())];
    let mut record = organisation_payer(rng, PaymentType::Fl)
        .with(Field::PayeeName, "Иванов Иван Иванович")
        .with(Field::PayeeAccount, gen_account(rng, INDIVIDUAL_BALANCE, &bic))
        .with(Field::PayeeBic, bic)
        .with(Field::Purpose, format!("Заработная плата за {month}"))
        .with(Field::PurposeCode, "1");
    if rng.gen_bool(0.5) {
        record = record.with(Field::PayeeInn, gen_inn12(rng));
    }
    record
}

fn unified_tax(rng: &mut StdRng) -> PaymentRecord {
    let uin = if rng.gen_bool(0.3) {
        gen_uin(rng)
    } else {
        "0".to_owned()
    };
    organisation_payer(rng, PaymentType::Fns)
        .with(Field::PayerStatus, "01")
        .with(Field::PayeeName, "Казначейство России (ФНС России)")
        .with(Field::PayeeInn, "7727406020")
        .with(Field::PayeeKpp, "770801001")
        .with(Field::PayeeAccount, "03100643000000018500")
        .with(Field::PayeeBic, "017003983")
        .with(Field::Purpose, "Единый налоговый платеж")
        .with(Field::Cbc, "18201061201010000510")
        .with(Field::Oktmo, "0")
        .with(Field::Uin, uin)
        .with(Field::Reason, "0")
        .with(Field::TaxPeriod, "0")
        .with(Field::DocumentNumber, "0")
        .with(Field::DocumentDate, "0")
}

fn customs_advance(rng: &mut StdRng) -> PaymentRecord {
    let declaration = format!("{:07}", rng.gen_range(1..10_000_000u32));
    let date = format!(
        "{:02}.{:02}.2024",
        rng.gen_range(1..29u32),
        rng.gen_range(1..13u32)
    );
    organisation_payer(rng, PaymentType::Customs)
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
        .with(Field::DocumentNumber, declaration)
        .with(Field::DocumentDate, date)
}

fn state_fee(rng: &mut StdRng) -> PaymentRecord {
    let bic = gen_bic(rng);
    PaymentRecord::new()
        .with(Field::PaymentType, PaymentType::BudgetOther)
        .with(Field::ForThirdFace, false)
        .with(Field::PayerStatus, "24")
        .with(Field::PayerName, "Иванов Иван Иванович")
        .with(Field::PayerInn, gen_inn12(rng))
        .with(Field::PayerAccount, gen_account(rng, INDIVIDUAL_BALANCE, &bic))
        .with(Field::PayerBic, bic)
        .with(Field::PayeeName, "УФК по г. Москве (ГУ МВД России по г. Москве)")
        .with(Field::PayeeInn, "7702070139")
        .with(Field::PayeeKpp, "770201001")
        .with(Field::PayeeAccount, "03100643000000017300")
        .with(Field::PayeeBic, "004525988")
        .with(Field::OperationKind, "01")
        .with(Field::Priority, 5_i64)
        .with(Field::Purpose, "Государственная пошлина")
        .with(Field::Cbc, "18810807141011000110")
        .with(Field::Oktmo, "45382000")
        .with(Field::Uin, "0")
}

/// Builds one valid order of `payment_type`.
pub fn build(rng: &mut StdRng, payment_type: PaymentType) -> PaymentRecord {
    match payment_type {
        PaymentType::Le => supplier_invoice(rng),
        PaymentType::Ip => entrepreneur_invoice(rng),
        PaymentType::Fl => salary(rng),
        PaymentType::Fns => unified_tax(rng),
        PaymentType::Customs => customs_advance(rng),
        PaymentType::BudgetOther => state_fee(rng),
    }
}
