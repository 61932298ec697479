//! End-to-end tests for the interview finance model.
//!
//! This test suite covers complete household scenarios:
//! - Period normalization of jobs and incomes
//! - Filtering by type and owner
//! - Asset lists with unanswered values
//! - Debt taxonomy totals
//! - Ledger running balances
//! - Case-management JSON export
//! - Catalog loading

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use interview_finance::catalog::{
    CatalogLoader, describe_period, expense_types, income_types, period_label,
};
use interview_finance::lists::{
    AssetList, DebtList, IncomeList, JobList, Ledger, Selection, VehicleList,
};
use interview_finance::models::{Asset, DebtCategory, Income, Job, LedgerEntry, Period};

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A household as the interview would hand it over once all questions are answered.
fn household() -> Value {
    json!({
        "jobs": [
            {
                "type": "wages",
                "owner": "client",
                "value": "1800",
                "net": "1500",
                "period": 24,
                "employer": "Riverside Clinic",
                "employer_address": "22 River Rd, Lowell, MA",
                "employer_phone": "978-555-0142"
            },
            {
                "type": "wages",
                "owner": "spouse",
                "is_hourly": true,
                "hourly_rate": "15",
                "hours_per_period": "40",
                "period": 52,
                "employer": "Corner Market"
            }
        ],
        "incomes": [
            { "type": "SSI", "owner": "child", "value": "914", "period": 12 },
            { "type": "child support", "owner": "client", "value": "75", "period": 52 },
            { "type": "SNAP", "owner": "client", "value": "290", "period": 12 },
            { "value": "40", "period": 1 }
        ],
        "assets": [
            { "type": "checking", "owner": "client", "market_value": "412.50" },
            { "type": "real estate", "owner": "client", "value": "650", "period": 12,
              "market_value": "180000", "balance": "142000" },
            { "type": "savings", "owner": "spouse" }
        ],
        "vehicles": [
            { "owner": "client", "value": "3500", "year": 2011, "make": "Toyota", "model": "Camry" },
            { "owner": "spouse", "value": "1200", "year": 2004, "make": "Ford", "model": "Ranger" }
        ],
        "debts": [
            { "category": "credit_card", "owner": "client", "value": "2300" },
            { "category": "payday_loan", "owner": "client", "value": "400" },
            { "category": "rent", "owner": "client", "value": "1850" },
            { "category": "council_tax", "owner": "spouse", "value": "220" },
            { "category": "universal_credit_advance", "owner": "spouse", "value": "600" }
        ],
        "ledger": [
            { "value": "10", "date": "2020-01-01", "transaction_type": "income" },
            { "value": "5", "date": "2020-03-01", "transaction_type": "expense" },
            { "value": "20", "date": "2020-02-01", "transaction_type": "income" }
        ]
    })
}

fn section<T: serde::de::DeserializeOwned>(name: &str) -> T {
    serde_json::from_value(household()[name].clone()).expect("household section should parse")
}

// =============================================================================
// SECTION 1: Jobs
// =============================================================================

#[test]
fn test_monthly_salary_normalizes_to_yearly() {
    let jobs = JobList::from(vec![Job::salaried("wages", decimal("3000"), Period::MONTHLY)]);
    assert_eq!(jobs.total(1, Selection::all()), decimal("36000"));
}

#[test]
fn test_household_jobs_gross_monthly() {
    let jobs: JobList = section("jobs");
    // 1800 × 24 / 12 = 3600; 15 × 40 × 52 / 12 = 2600
    assert_eq!(jobs.gross_total(12, Selection::all()), decimal("6200"));
    assert_eq!(jobs.gross_total(12, Selection::all().owned_by("spouse")), decimal("2600"));
}

#[test]
fn test_household_jobs_net_yearly() {
    let jobs: JobList = section("jobs");
    // 1500 × 24; hourly job has no net answer
    assert_eq!(jobs.net_total(1, "wages"), decimal("36000"));
}

#[test]
fn test_employer_contact_line() {
    let jobs: JobList = section("jobs");
    assert_eq!(
        jobs.get(0).unwrap().name_address_phone(),
        "Riverside Clinic: 22 River Rd, Lowell, MA, 978-555-0142"
    );
}

#[test]
fn test_hourly_job_yearly_hours() {
    let jobs: JobList = section("jobs");
    assert_eq!(jobs.get(1).unwrap().normalized_hours(Period::YEARLY), decimal("2080"));
}

// =============================================================================
// SECTION 2: Incomes
// =============================================================================

#[test]
fn test_household_income_total_yearly() {
    let incomes: IncomeList = section("incomes");
    // 914 × 12 + 75 × 52 + 290 × 12 + 40
    assert_eq!(incomes.total(1, Selection::all()), decimal("18388"));
}

#[test]
fn test_public_benefits_by_type_set() {
    let incomes: IncomeList = section("incomes");
    let benefits = ["SSI", "SNAP", "SSDI"];
    assert_eq!(incomes.total(12, Selection::kinds(&benefits)), decimal("1204"));
}

#[test]
fn test_untyped_income_excluded_from_types() {
    let incomes: IncomeList = section("incomes");
    let types: Vec<_> = incomes.types().into_iter().collect();
    assert_eq!(types, vec!["SNAP", "SSI", "child support"]);
}

#[test]
fn test_client_owned_income() {
    let incomes: IncomeList = section("incomes");
    let owners: Vec<_> = incomes.owners(Selection::all()).into_iter().collect();
    assert_eq!(owners, vec!["child", "client"]);
    // 75 × 52 / 12 + 290
    assert_eq!(
        incomes.total(12, Selection::all().owned_by("client")),
        decimal("615")
    );
}

#[test]
fn test_unanswered_owner_totals_zero() {
    let incomes: IncomeList = section("incomes");
    assert_eq!(
        incomes.total(12, Selection::kind("SSI").owner_answer(Some(""))),
        Decimal::ZERO
    );
}

#[test]
fn test_period_zero_totals_zero() {
    let incomes: IncomeList = section("incomes");
    let jobs: JobList = section("jobs");
    assert_eq!(incomes.total(0, Selection::all()), Decimal::ZERO);
    assert_eq!(jobs.gross_total(0, Selection::all()), Decimal::ZERO);
    assert_eq!(jobs.net_total(0, Selection::all()), Decimal::ZERO);
}

#[test]
fn test_matches_fills_fixed_form_slots() {
    let mut incomes: IncomeList = section("incomes");
    incomes.push(Income::new("SSI", decimal("200"), Period::MONTHLY).with_owner("client"));

    let ssi = incomes.matches("SSI");
    assert_eq!(ssi.len(), 2);
    let owners: Vec<_> = ssi.iter().filter_map(|i| i.owner.as_deref()).collect();
    assert_eq!(owners, vec!["child", "client"]);
}

// =============================================================================
// SECTION 3: Assets and vehicles
// =============================================================================

#[test]
fn test_assets_without_value_count_zero() {
    let assets: AssetList = section("assets");
    assert_eq!(assets.total(12, Selection::all()), decimal("650"));
}

#[test]
fn test_asset_market_value_and_balance() {
    let assets: AssetList = section("assets");
    assert_eq!(assets.market_value_total(Selection::all()), decimal("180412.50"));
    assert_eq!(assets.balance_total("real estate"), decimal("142000"));
}

#[test]
fn test_vehicle_descriptions_and_total() {
    let vehicles: VehicleList = section("vehicles");
    let descriptions: Vec<_> = vehicles.iter().map(|v| v.year_make_model()).collect();
    assert_eq!(descriptions, vec!["2011 / Toyota / Camry", "2004 / Ford / Ranger"]);
    assert_eq!(vehicles.total(Selection::all()), decimal("4700"));
}

// =============================================================================
// SECTION 4: Debts
// =============================================================================

#[test]
fn test_debts_by_family() {
    let debts: DebtList = section("debts");
    assert_eq!(debts.total_in_category(DebtCategory::Loans), decimal("2700"));
    assert_eq!(debts.total_in_category(DebtCategory::Consumer), decimal("1850"));
    assert_eq!(debts.total_in_category(DebtCategory::Tax), decimal("820"));
    assert_eq!(debts.total_in_category(DebtCategory::OverpaymentOfBenefits), decimal("600"));
    assert_eq!(debts.total(Selection::all()), decimal("5370"));
}

#[test]
fn test_debts_by_owner() {
    let debts: DebtList = section("debts");
    assert_eq!(debts.total(Selection::all().owned_by("spouse")), decimal("820"));
}

// =============================================================================
// SECTION 5: Ledger
// =============================================================================

#[test]
fn test_ledger_running_totals() {
    let mut ledger: Ledger = section("ledger");
    ledger.calculate();

    let dates: Vec<_> = ledger.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date("2020-01-01"), date("2020-02-01"), date("2020-03-01")]);
    let totals: Vec<_> = ledger.iter().filter_map(|e| e.running_total).collect();
    assert_eq!(totals, vec![decimal("10"), decimal("30"), decimal("25")]);
}

#[test]
fn test_ledger_serializes_running_totals() {
    let mut ledger = Ledger::from(vec![
        LedgerEntry::credit(date("2021-06-01"), decimal("100")),
        LedgerEntry::debit(date("2021-05-01"), decimal("40")),
    ]);
    ledger.calculate();
    let json = serde_json::to_value(&ledger).unwrap();
    assert_eq!(json[0]["date"], "2021-05-01");
    assert_eq!(json[0]["running_total"], "-40");
    assert_eq!(json[1]["running_total"], "60");
}

// =============================================================================
// SECTION 6: Export
// =============================================================================

#[test]
fn test_income_export_shape() {
    let incomes = IncomeList::from(vec![
        Income::new("SSI", decimal("914"), Period::MONTHLY),
        Income::new("child support", decimal("75"), Period::WEEKLY),
    ]);
    let exported: Value = serde_json::from_str(&incomes.to_json().unwrap()).unwrap();
    assert_eq!(
        exported,
        json!([
            { "type": "SSI", "frequency": 12, "amount": 914 },
            { "type": "child support", "frequency": 52, "amount": 75 }
        ])
    );
}

#[test]
fn test_export_keeps_raw_hourly_value() {
    let jobs: JobList = section("jobs");
    let exported: Value = serde_json::from_str(&jobs.to_json().unwrap()).unwrap();
    assert_eq!(exported[1]["frequency"], 52);
    assert_eq!(exported[1]["amount"].as_f64(), Some(0.0));
}

#[test]
fn test_export_amount_is_exact() {
    let assets = AssetList::from(vec![
        Asset::new("real estate", decimal("98765432109876543.21"), Period::MONTHLY),
        Asset::of_kind("savings"),
    ]);
    let exported = assets.to_json().unwrap();
    assert_eq!(
        exported,
        r#"[{"type":"real estate","frequency":12,"amount":98765432109876543.21},{"type":"savings","frequency":1,"amount":null}]"#
    );
}

// =============================================================================
// SECTION 7: Gathering
// =============================================================================

#[test]
fn test_gather_then_total() {
    let mut incomes = IncomeList::new();
    assert!(!incomes.is_gathered());
    incomes
        .ensure_gathered(|| Ok(section::<Vec<Income>>("incomes")))
        .unwrap();
    assert!(incomes.is_gathered());
    assert_eq!(incomes.total(1, "SSI"), decimal("10968"));
}

// =============================================================================
// SECTION 8: Catalogs
// =============================================================================

#[test]
fn test_catalog_loader_reads_shipped_file() {
    let loader = CatalogLoader::load("./config").expect("Failed to load catalogs");
    assert_eq!(loader.catalogs().income_types, income_types());
    assert_eq!(
        loader.table("asset_types").and_then(|t| t.label_for("vehicle")),
        Some("Cars")
    );
    let expenses = loader.table("expense_types").unwrap();
    assert!(expenses.contains("Alcoholic drink, tobacco &carcotics"));
    assert_eq!(expenses, &expense_types());
}

#[test]
fn test_period_labels() {
    assert_eq!(period_label("12"), "monthly");
    assert_eq!(period_label("abc"), "");
    assert_eq!(describe_period(6), "Six times per year");
}
