//! The catalog entries themselves.
//!
//! Three contracts, each with two levers and two negotiable clauses. The
//! legal wordings are the full alternative texts a scenario can apply; the
//! weight tables drive the financial impact maths.

use cse_types::{ClauseOption, ContractType, RiskTier};

use crate::{
    ClauseOptionSpec, ClauseSpec, ClauseWeights, ContractDisplay, ContractSpec, LeverSpec,
    SpendModel,
};

pub(crate) fn hospital() -> ContractSpec {
    ContractSpec {
        contract_type: ContractType::Hospital,
        display: ContractDisplay {
            name: "Memorial Health System",
            category: "Inpatient Facility",
            accent_color: "#4f46e5",
        },
        baseline_monthly_k: 2000.0,
        impact_scaler_k: 50.0,
        risk_threshold_k: 100.0,
        levers: vec![
            LeverSpec {
                id: "base",
                label: "DRG Base Rate Increase",
                min: 0.0,
                max: 10.0,
                step: 0.5,
                unit: "%",
                default_value: 3.5,
            },
            LeverSpec {
                id: "carveout",
                label: "Ortho Carve-Out",
                min: -5.0,
                max: 5.0,
                step: 0.5,
                unit: "%",
                default_value: 0.0,
            },
        ],
        clauses: vec![
            ClauseSpec {
                id: "implant",
                title: "High-Cost Implants",
                risk_tier: RiskTier::Critical,
                current_summary: "60% of Billed Charges",
                legal_text: "Reimbursement for high-cost implants, defined as any implantable device with a cost exceeding $500, shall be set at sixty percent (60%) of the Provider's billed charges for such items. This rate applies regardless of the invoice cost to the Provider.",
                market_note: "85% use Cost Plus",
                weights: ClauseWeights {
                    provider_fav: 3.0,
                    balanced: 1.0,
                    aggressive: 0.0,
                },
                options: [
                    ClauseOptionSpec {
                        option: ClauseOption::Aggressive,
                        label: "Fixed Fee ($3k max)",
                        impact_note: "High Savings",
                        legal_text: "Reimbursement for high-cost implants shall be set at a fixed fee not to exceed $3,000 per item, inclusive of all shipping and handling. Any cost in excess of this limit shall be the sole responsibility of the Provider.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::Balanced,
                        label: "Cost Plus 10%",
                        impact_note: "Market Std",
                        legal_text: "Reimbursement for high-cost implants shall be set at the Provider's invoice cost plus ten percent (10%), not to exceed a maximum markup of $500 per item. Provider must submit valid invoices with claims.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::ProviderFav,
                        label: "% of Billed",
                        impact_note: "High Risk",
                        legal_text: "Reimbursement for high-cost implants, defined as any implantable device with a cost exceeding $500, shall be set at sixty percent (60%) of the Provider's billed charges for such items. This rate applies regardless of the invoice cost to the Provider.",
                    },
                ],
            },
            ClauseSpec {
                id: "stoploss",
                title: "Stop-Loss Threshold",
                risk_tier: RiskTier::Med,
                current_summary: "Threshold at $75k",
                legal_text: "For inpatient claims where total billed charges exceed seventy-five thousand dollars ($75,000), a stop-loss provision shall apply. Reimbursement for charges in excess of this threshold shall be paid at fifty percent (50%) of billed charges in addition to the base DRG payment.",
                market_note: "Market avg is $125k",
                weights: ClauseWeights {
                    provider_fav: 2.0,
                    balanced: 0.5,
                    aggressive: 0.0,
                },
                options: [
                    ClauseOptionSpec {
                        option: ClauseOption::Aggressive,
                        label: "$150k Threshold",
                        impact_note: "Savings",
                        legal_text: "For inpatient claims where total billed charges exceed one hundred fifty thousand dollars ($150,000), a stop-loss provision shall apply. Reimbursement for charges in excess of this threshold shall be paid at forty percent (40%) of billed charges.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::Balanced,
                        label: "$100k Threshold",
                        impact_note: "Neutral",
                        legal_text: "For inpatient claims where total billed charges exceed one hundred thousand dollars ($100,000), a stop-loss provision shall apply. Reimbursement for charges in excess of this threshold shall be paid at fifty percent (50%) of billed charges in addition to the base DRG payment.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::ProviderFav,
                        label: "$75k Threshold",
                        impact_note: "Costly",
                        legal_text: "For inpatient claims where total billed charges exceed seventy-five thousand dollars ($75,000), a stop-loss provision shall apply. Reimbursement for charges in excess of this threshold shall be paid at fifty percent (50%) of billed charges in addition to the base DRG payment.",
                    },
                ],
            },
        ],
        spend_model: SpendModel::BaselineIncrease {
            carve_out_share: 0.3,
        },
    }
}

pub(crate) fn anesthesia() -> ContractSpec {
    ContractSpec {
        contract_type: ContractType::Anesthesia,
        display: ContractDisplay {
            name: "Metro Anesthesia Group",
            category: "Professional Services",
            accent_color: "#0891b2",
        },
        baseline_monthly_k: 450.0,
        impact_scaler_k: 10.0,
        risk_threshold_k: 20.0,
        levers: vec![
            LeverSpec {
                id: "base",
                label: "ASA Conversion Factor",
                min: 40.0,
                max: 80.0,
                step: 1.0,
                unit: "$",
                default_value: 52.0,
            },
            LeverSpec {
                id: "carveout",
                label: "Flat Fee Modifiers",
                min: 0.0,
                max: 20.0,
                step: 5.0,
                unit: "%",
                default_value: 5.0,
            },
        ],
        clauses: vec![
            ClauseSpec {
                id: "afterhours",
                title: "After-Hours Premium",
                risk_tier: RiskTier::High,
                current_summary: "50% premium for all weekend cases",
                legal_text: "Services rendered on weekends (Saturday 12:00 AM through Sunday 11:59 PM) or federal holidays shall be reimbursed at a fifty percent (50%) premium over the standard allowable rate per unit.",
                market_note: "Standard is 20% or flat call stipend",
                weights: ClauseWeights {
                    provider_fav: 3.0,
                    balanced: 1.0,
                    aggressive: 0.0,
                },
                options: [
                    ClauseOptionSpec {
                        option: ClauseOption::Aggressive,
                        label: "Flat Stipend Only",
                        impact_note: "High Savings",
                        legal_text: "Services rendered after hours or on weekends shall not accrue additional unit value. Provider shall receive a flat annual stipend of $25,000 to cover all call coverage requirements.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::Balanced,
                        label: "20% Premium",
                        impact_note: "Market Std",
                        legal_text: "Services rendered on federal holidays shall be reimbursed at a twenty percent (20%) premium over the standard allowable rate. Weekend services shall be reimbursed at the standard rate.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::ProviderFav,
                        label: "50% Premium",
                        impact_note: "High Cost",
                        legal_text: "Services rendered on weekends (Saturday 12:00 AM through Sunday 11:59 PM) or federal holidays shall be reimbursed at a fifty percent (50%) premium over the standard allowable rate per unit.",
                    },
                ],
            },
            ClauseSpec {
                id: "supervision",
                title: "CRNA Supervision Ratio",
                risk_tier: RiskTier::Low,
                current_summary: "1:4 Ratio Permitted",
                legal_text: "Anesthesiologists may supervise up to four (4) Certified Registered Nurse Anesthetists (CRNAs) concurrently. Claims for medical direction shall be submitted with the appropriate modifiers indicating a ratio of 1:4 or fewer.",
                market_note: "Standard is 1:4",
                weights: ClauseWeights {
                    provider_fav: 2.0,
                    balanced: 0.5,
                    aggressive: 0.0,
                },
                options: [
                    ClauseOptionSpec {
                        option: ClauseOption::Aggressive,
                        label: "1:4 Mandatory",
                        impact_note: "Neutral",
                        legal_text: "Anesthesiologists must supervise four (4) Certified Registered Nurse Anesthetists (CRNAs) concurrently where volume permits. Payer shall not reimburse for medical direction at ratios lower than 1:4 unless emergency circumstances exist.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::Balanced,
                        label: "1:3 Permitted",
                        impact_note: "Minor Cost",
                        legal_text: "Anesthesiologists may supervise up to three (3) Certified Registered Nurse Anesthetists (CRNAs) concurrently. Claims shall be submitted with appropriate modifiers indicating the actual supervision ratio.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::ProviderFav,
                        label: "1:2 Required",
                        impact_note: "High Cost",
                        legal_text: "Anesthesiologists shall supervise no more than two (2) Certified Registered Nurse Anesthetists (CRNAs) concurrently to ensure highest quality of care. Reimbursement shall reflect the 1:2 medical direction rate.",
                    },
                ],
            },
        ],
        spend_model: SpendModel::UnitVolume {
            monthly_units: 8000.0,
        },
    }
}

pub(crate) fn home_health() -> ContractSpec {
    ContractSpec {
        contract_type: ContractType::HomeHealth,
        display: ContractDisplay {
            name: "Valley Visiting Nurses",
            category: "Post-Acute Care",
            accent_color: "#16a34a",
        },
        baseline_monthly_k: 180.0,
        impact_scaler_k: 10.0,
        risk_threshold_k: 20.0,
        levers: vec![
            LeverSpec {
                id: "base",
                label: "Per Visit Rate (RN)",
                min: 120.0,
                max: 200.0,
                step: 5.0,
                unit: "$",
                default_value: 145.0,
            },
            LeverSpec {
                id: "carveout",
                label: "Rural Add-on",
                min: 0.0,
                max: 15.0,
                step: 1.0,
                unit: "%",
                default_value: 5.0,
            },
        ],
        clauses: vec![
            ClauseSpec {
                id: "mileage",
                title: "Mileage Reimbursement",
                risk_tier: RiskTier::Med,
                current_summary: "IRS Rate + $5 Surcharge",
                legal_text: "Provider shall be reimbursed for mileage incurred during patient visits at the current IRS standard mileage rate, plus an additional five dollar ($5.00) administrative surcharge per visit requiring travel exceeding 10 miles.",
                market_note: "Standard is IRS Rate only",
                weights: ClauseWeights {
                    provider_fav: 3.0,
                    balanced: 1.0,
                    aggressive: 0.0,
                },
                options: [
                    ClauseOptionSpec {
                        option: ClauseOption::Aggressive,
                        label: "IRS Rate Capped",
                        impact_note: "Savings",
                        legal_text: "Mileage reimbursement shall be limited to the current IRS standard mileage rate for travel exceeding 20 miles round trip. No additional surcharges or administrative fees shall apply.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::Balanced,
                        label: "IRS Rate Flat",
                        impact_note: "Market Std",
                        legal_text: "Provider shall be reimbursed for mileage incurred during patient visits at the current IRS standard mileage rate. This payment is inclusive of all travel-related expenses.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::ProviderFav,
                        label: "IRS + Surcharge",
                        impact_note: "Costly",
                        legal_text: "Provider shall be reimbursed for mileage incurred during patient visits at the current IRS standard mileage rate, plus an additional five dollar ($5.00) administrative surcharge per visit requiring travel exceeding 10 miles.",
                    },
                ],
            },
            ClauseSpec {
                id: "supplies",
                title: "Wound Care Supplies",
                risk_tier: RiskTier::High,
                current_summary: "Paid separately at Invoice Cost",
                legal_text: "Wound care supplies and other disposable medical items used during the course of a visit shall be billed separately and reimbursed at one hundred percent (100%) of the invoice cost to the Provider.",
                market_note: "Usually included in Visit Rate",
                weights: ClauseWeights {
                    provider_fav: 2.0,
                    balanced: 0.5,
                    aggressive: 0.0,
                },
                options: [
                    ClauseOptionSpec {
                        option: ClauseOption::Aggressive,
                        label: "Inclusive in Rate",
                        impact_note: "High Savings",
                        legal_text: "The Per Visit Rate shall be all-inclusive. No separate reimbursement shall be made for wound care supplies, durable medical equipment, or other disposable items used during the visit.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::Balanced,
                        label: "Capped Per Visit",
                        impact_note: "Neutral",
                        legal_text: "Routine wound care supplies are included in the Per Visit Rate. Specialized supplies may be billed separately, not to exceed $25.00 per visit, provided prior authorization is obtained.",
                    },
                    ClauseOptionSpec {
                        option: ClauseOption::ProviderFav,
                        label: "Separate Payment",
                        impact_note: "High Risk",
                        legal_text: "Wound care supplies and other disposable medical items used during the course of a visit shall be billed separately and reimbursed at one hundred percent (100%) of the invoice cost to the Provider.",
                    },
                ],
            },
        ],
        spend_model: SpendModel::UnitVolume {
            monthly_units: 1200.0,
        },
    }
}
