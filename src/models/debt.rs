//! Debt model and the debt category taxonomy.
//!
//! Categories form a fixed tree rooted at [`DebtCategory::General`] with five
//! families underneath: consumer, liability, loans, penalties and tax. The
//! tree only classifies debts for forms; no category changes how a debt is
//! totalled.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{SignedRecord, Tagged, TransactionType};

/// Classification of a debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtCategory {
    /// Uncategorized debt; root of the taxonomy.
    #[default]
    General,

    // Families
    /// Household bills and arrears.
    Consumer,
    /// Obligations owed to other people.
    Liability,
    /// Borrowed money.
    Loans,
    /// Fines and penalty charges.
    Penalties,
    /// Government and tax debts.
    Tax,

    // Loans
    /// Revolving credit lines.
    RevolvingCredit,
    /// Credit card balance.
    CreditCard,
    /// Charge card balance.
    ChargeCard,
    /// Bank overdraft.
    BankOverdraft,
    /// Budget account.
    BudgetAccount,
    /// Mortgage.
    Mortgage,
    /// Personal loan.
    PersonalLoan,
    /// Student loans.
    StudentLoans,
    /// Informal loan from friends or family.
    InformalLoan,
    /// Hire purchase agreement.
    HirePurchase,
    /// Payday loan.
    PaydayLoan,
    /// Bill of sale (logbook loan).
    BillOfSale,
    /// Pawnbroker loan.
    Pawnbroker,
    /// Trading cheque.
    TradingCheque,
    /// Credit sale agreement.
    CreditSaleAgreement,
    /// Interest-free credit.
    InterestFreeCredit,
    /// Catalogue spending.
    CatalogueSpending,

    // Consumer
    /// Rent arrears.
    Rent,
    /// Gas or electricity arrears.
    EnergyBillArrears,
    /// Water arrears.
    WaterArrears,
    /// Irregular bill.
    NonRegularBill,
    /// Private parking charge.
    PrivateParkingCharge,

    // Tax
    /// TV licence arrears.
    TvLicence,
    /// National taxes.
    NationalTax,
    /// Income tax.
    IncomeTax,
    /// National insurance.
    NationalInsurance,
    /// Value added tax.
    ValueAddedTax,
    /// Business rates.
    NonDomesticRates,
    /// Council tax.
    CouncilTax,
    /// Repayable benefit overpayments.
    OverpaymentOfBenefits,
    /// Social fund loan.
    SocialFundLoan,
    /// Universal credit advance.
    UniversalCreditAdvance,
    /// Tax credit overpayment.
    TaxCreditOverpayment,

    // Penalties
    /// Court fine.
    Fine,
    /// Penalty charge notice.
    PenaltyCharge,
    /// Traffic penalty.
    TrafficPenalties,

    // Liability
    /// Child support arrears.
    ChildSupport,
    /// Civil damages.
    CivilDamages,
    /// Maintenance arrears.
    Maintenance,
    /// Shoplifting civil recovery.
    ShopliftingRecovery,
}

impl DebtCategory {
    /// Every category, parents before children.
    pub const ALL: [DebtCategory; 46] = [
        DebtCategory::General,
        DebtCategory::Consumer,
        DebtCategory::Liability,
        DebtCategory::Loans,
        DebtCategory::Penalties,
        DebtCategory::Tax,
        DebtCategory::RevolvingCredit,
        DebtCategory::CreditCard,
        DebtCategory::ChargeCard,
        DebtCategory::BankOverdraft,
        DebtCategory::BudgetAccount,
        DebtCategory::Mortgage,
        DebtCategory::PersonalLoan,
        DebtCategory::StudentLoans,
        DebtCategory::InformalLoan,
        DebtCategory::HirePurchase,
        DebtCategory::PaydayLoan,
        DebtCategory::BillOfSale,
        DebtCategory::Pawnbroker,
        DebtCategory::TradingCheque,
        DebtCategory::CreditSaleAgreement,
        DebtCategory::InterestFreeCredit,
        DebtCategory::CatalogueSpending,
        DebtCategory::Rent,
        DebtCategory::EnergyBillArrears,
        DebtCategory::WaterArrears,
        DebtCategory::NonRegularBill,
        DebtCategory::PrivateParkingCharge,
        DebtCategory::TvLicence,
        DebtCategory::NationalTax,
        DebtCategory::IncomeTax,
        DebtCategory::NationalInsurance,
        DebtCategory::ValueAddedTax,
        DebtCategory::NonDomesticRates,
        DebtCategory::CouncilTax,
        DebtCategory::OverpaymentOfBenefits,
        DebtCategory::SocialFundLoan,
        DebtCategory::UniversalCreditAdvance,
        DebtCategory::TaxCreditOverpayment,
        DebtCategory::Fine,
        DebtCategory::PenaltyCharge,
        DebtCategory::TrafficPenalties,
        DebtCategory::ChildSupport,
        DebtCategory::CivilDamages,
        DebtCategory::Maintenance,
        DebtCategory::ShopliftingRecovery,
    ];

    /// The enclosing category, or `None` for [`DebtCategory::General`].
    pub fn parent(self) -> Option<DebtCategory> {
        use DebtCategory::*;
        let parent = match self {
            General => return None,
            Consumer | Liability | Loans | Penalties | Tax => General,
            RevolvingCredit | Mortgage | PersonalLoan | StudentLoans | InformalLoan
            | HirePurchase | PaydayLoan | BillOfSale | Pawnbroker | TradingCheque
            | CreditSaleAgreement | InterestFreeCredit | CatalogueSpending => Loans,
            CreditCard | ChargeCard | BankOverdraft | BudgetAccount => RevolvingCredit,
            Rent | EnergyBillArrears | WaterArrears | NonRegularBill | PrivateParkingCharge => {
                Consumer
            }
            TvLicence | NationalTax | NonDomesticRates | CouncilTax | OverpaymentOfBenefits => Tax,
            IncomeTax | NationalInsurance | ValueAddedTax => NationalTax,
            SocialFundLoan | UniversalCreditAdvance | TaxCreditOverpayment => {
                OverpaymentOfBenefits
            }
            Fine | PenaltyCharge | TrafficPenalties => Penalties,
            ChildSupport | CivilDamages | Maintenance | ShopliftingRecovery => Liability,
        };
        Some(parent)
    }

    /// The top-level family this category belongs to.
    ///
    /// Returns [`DebtCategory::General`] for the root itself.
    ///
    /// ```
    /// use interview_finance::models::DebtCategory;
    ///
    /// assert_eq!(DebtCategory::CreditCard.family(), DebtCategory::Loans);
    /// assert_eq!(DebtCategory::IncomeTax.family(), DebtCategory::Tax);
    /// ```
    pub fn family(self) -> DebtCategory {
        let mut current = self;
        while let Some(parent) = current.parent() {
            if parent == DebtCategory::General {
                return current;
            }
            current = parent;
        }
        current
    }

    /// Whether this category is `ancestor` or lies beneath it.
    pub fn is_within(self, ancestor: DebtCategory) -> bool {
        let mut current = Some(self);
        while let Some(category) = current {
            if category == ancestor {
                return true;
            }
            current = category.parent();
        }
        false
    }

    /// Stable code stored on records; identical to the serialized form.
    pub fn code(self) -> &'static str {
        use DebtCategory::*;
        match self {
            General => "general",
            Consumer => "consumer",
            Liability => "liability",
            Loans => "loans",
            Penalties => "penalties",
            Tax => "tax",
            RevolvingCredit => "revolving_credit",
            CreditCard => "credit_card",
            ChargeCard => "charge_card",
            BankOverdraft => "bank_overdraft",
            BudgetAccount => "budget_account",
            Mortgage => "mortgage",
            PersonalLoan => "personal_loan",
            StudentLoans => "student_loans",
            InformalLoan => "informal_loan",
            HirePurchase => "hire_purchase",
            PaydayLoan => "payday_loan",
            BillOfSale => "bill_of_sale",
            Pawnbroker => "pawnbroker",
            TradingCheque => "trading_cheque",
            CreditSaleAgreement => "credit_sale_agreement",
            InterestFreeCredit => "interest_free_credit",
            CatalogueSpending => "catalogue_spending",
            Rent => "rent",
            EnergyBillArrears => "energy_bill_arrears",
            WaterArrears => "water_arrears",
            NonRegularBill => "non_regular_bill",
            PrivateParkingCharge => "private_parking_charge",
            TvLicence => "tv_licence",
            NationalTax => "national_tax",
            IncomeTax => "income_tax",
            NationalInsurance => "national_insurance",
            ValueAddedTax => "value_added_tax",
            NonDomesticRates => "non_domestic_rates",
            CouncilTax => "council_tax",
            OverpaymentOfBenefits => "overpayment_of_benefits",
            SocialFundLoan => "social_fund_loan",
            UniversalCreditAdvance => "universal_credit_advance",
            TaxCreditOverpayment => "tax_credit_overpayment",
            Fine => "fine",
            PenaltyCharge => "penalty_charge",
            TrafficPenalties => "traffic_penalties",
            ChildSupport => "child_support",
            CivilDamages => "civil_damages",
            Maintenance => "maintenance",
            ShopliftingRecovery => "shoplifting_recovery",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        use DebtCategory::*;
        match self {
            General => "Debt",
            Consumer => "Consumer debt",
            Liability => "Liability",
            Loans => "Loans",
            Penalties => "Penalties",
            Tax => "Tax debt",
            RevolvingCredit => "Revolving credit",
            CreditCard => "Credit card",
            ChargeCard => "Charge card",
            BankOverdraft => "Bank overdraft",
            BudgetAccount => "Budget account",
            Mortgage => "Mortgage",
            PersonalLoan => "Personal loan",
            StudentLoans => "Student loans",
            InformalLoan => "Informal loan",
            HirePurchase => "Hire purchase",
            PaydayLoan => "Payday loan",
            BillOfSale => "Bill of sale",
            Pawnbroker => "Pawnbroker",
            TradingCheque => "Trading cheque",
            CreditSaleAgreement => "Credit sale agreement",
            InterestFreeCredit => "Interest-free credit",
            CatalogueSpending => "Catalogue spending",
            Rent => "Rent arrears",
            EnergyBillArrears => "Energy bill arrears",
            WaterArrears => "Water arrears",
            NonRegularBill => "Non-regular bill",
            PrivateParkingCharge => "Private parking charge",
            TvLicence => "TV licence",
            NationalTax => "National tax",
            IncomeTax => "Income tax",
            NationalInsurance => "National insurance",
            ValueAddedTax => "Value added tax",
            NonDomesticRates => "Non-domestic rates",
            CouncilTax => "Council tax",
            OverpaymentOfBenefits => "Overpayment of benefits",
            SocialFundLoan => "Social fund loan",
            UniversalCreditAdvance => "Universal credit advance",
            TaxCreditOverpayment => "Tax credit overpayment",
            Fine => "Fine",
            PenaltyCharge => "Penalty charge",
            TrafficPenalties => "Traffic penalties",
            ChildSupport => "Child support",
            CivilDamages => "Civil damages",
            Maintenance => "Maintenance",
            ShopliftingRecovery => "Shoplifting recovery",
        }
    }
}

impl fmt::Display for DebtCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An amount owed.
///
/// # Example
///
/// ```
/// use interview_finance::models::{Debt, DebtCategory};
/// use rust_decimal::Decimal;
///
/// let card = Debt::new(DebtCategory::CreditCard, Decimal::new(1250, 0));
/// assert_eq!(card.category.family(), DebtCategory::Loans);
/// assert_eq!(card.amount(), Decimal::new(1250, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Debt {
    /// Free-form type code from the interview.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Who owes the debt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Amount owed.
    #[serde(default)]
    pub value: Decimal,
    /// Optional transaction direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    /// Position in the debt taxonomy.
    #[serde(default)]
    pub category: DebtCategory,
}

impl Debt {
    /// Creates a debt in the given category.
    pub fn new(category: DebtCategory, value: Decimal) -> Self {
        Self {
            category,
            value,
            ..Self::default()
        }
    }

    /// Sets the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// The value, negated for expenses.
    pub fn amount(&self) -> Decimal {
        TransactionType::sign(self.transaction_type, self.value)
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount())
    }
}

impl Tagged for Debt {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl SignedRecord for Debt {
    fn amount(&self) -> Decimal {
        Debt::amount(self)
    }
}
