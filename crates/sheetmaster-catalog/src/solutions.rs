//! The solution catalog: themed pages bundling several tools and presets.

use crate::engine::{provided, value_or};
use crate::types::{Generator, InputSpec, Params, Scenario, SelectOption, Solution, Tool};

/// Every solution page, in display order.
pub static SOLUTIONS: &[Solution] = &[
    Solution {
        slug: "data-cleaning",
        title: "Email Extractor & Data Cleanup Tools | Free Online",
        meta_description: "Extract emails from messy text, pull domains from URLs, and clean up formatting issues. Free tools for marketers, sales teams, and data analysts.",
        icon: "Mail",
        description: "Pull emails, domains & clean messy data in seconds",
        tools: &[
            Tool {
                id: "extract-email",
                name: "Email Extractor",
                description: "Pull all email addresses from any text",
                formula_slug: "extract-email",
                inputs: &[InputSpec::text("target_cell", "Cell with Text")
                    .placeholder("e.g., A2")
                    .fallback("A2")],
                generator: Generator::Pattern(
                    r#"=REGEXEXTRACT({{target_cell}}, "[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")"#,
                ),
            },
            Tool {
                id: "extract-domain",
                name: "Domain Extractor",
                description: "Get the domain name from any URL",
                formula_slug: "extract-domain",
                inputs: &[InputSpec::text("target_cell", "Cell with URL")
                    .placeholder("e.g., A2")
                    .fallback("A2")],
                generator: Generator::Pattern(
                    r#"=REGEXEXTRACT({{target_cell}}, "^(?:https?:\/\/)?(?:www\.)?([^\/]+)")"#,
                ),
            },
            Tool {
                id: "trim-text",
                name: "Remove Extra Spaces",
                description: "Clean up double spaces and trailing whitespace",
                formula_slug: "trim",
                inputs: &[InputSpec::text("text", "Cell to Clean")
                    .placeholder("e.g., A2")
                    .fallback("A2")],
                generator: Generator::Call("TRIM"),
            },
            Tool {
                id: "proper-case",
                name: "Fix Capitalization",
                description: "Convert text to Title Case (like names)",
                formula_slug: "proper",
                inputs: &[InputSpec::text("text", "Cell to Format")
                    .placeholder("e.g., A2")
                    .fallback("A2")],
                generator: Generator::Call("PROPER"),
            },
        ],
        scenarios: &[
            Scenario {
                id: "crm-cleanup",
                name: "CRM/Salesforce Export",
                description: "Clean up messy contact lists from your CRM",
                values: &[("target_cell", "A2")],
            },
            Scenario {
                id: "linkedin-leads",
                name: "LinkedIn Lead List",
                description: "Extract emails from LinkedIn Sales Navigator exports",
                values: &[("target_cell", "B2")],
            },
            Scenario {
                id: "web-scrape",
                name: "Web Scraped Data",
                description: "Clean data copied from websites or PDFs",
                values: &[("text", "A2")],
            },
        ],
        rich_content: include_str!("../content/solution-data-cleaning.html"),
    },
    Solution {
        slug: "hr-time-calculator",
        title: "Business Days Calculator | Workdays Between Dates",
        meta_description: "Calculate working days between dates, excluding weekends and holidays. Perfect for project planning, PTO tracking, and contract management.",
        icon: "Calendar",
        description: "Count workdays, calculate tenure & track deadlines",
        tools: &[
            Tool {
                id: "networkdays",
                name: "Business Days Counter",
                description: "Count workdays between two dates (skips weekends)",
                formula_slug: "networkdays",
                inputs: &[
                    InputSpec::text("start_date", "Start Date").placeholder("e.g., A2 or \"1/15/2024\""),
                    InputSpec::text("end_date", "End Date").placeholder("e.g., B2 or \"3/15/2024\""),
                    InputSpec::text("holidays", "Holidays (optional)")
                        .placeholder("e.g., C2:C10")
                        .optional(),
                ],
                generator: Generator::Call("NETWORKDAYS"),
            },
            Tool {
                id: "datedif",
                name: "Time Between Dates",
                description: "Calculate years, months, or days between dates",
                formula_slug: "datedif",
                inputs: &[
                    InputSpec::text("start_date", "Start Date").placeholder("e.g., A2 (hire date)"),
                    InputSpec::text("end_date", "End Date").placeholder("e.g., TODAY()"),
                    InputSpec::select("unit", "What to Calculate", TENURE_UNITS).fallback("\"Y\""),
                ],
                generator: Generator::Call("DATEDIF"),
            },
            Tool {
                id: "edate",
                name: "Future Date Calculator",
                description: "Find a date X months from now",
                formula_slug: "edate",
                inputs: &[
                    InputSpec::text("start_date", "Starting Date").placeholder("e.g., A2"),
                    InputSpec::number("months", "Months to Add")
                        .placeholder("e.g., 12")
                        .fallback("12"),
                ],
                generator: Generator::Call("EDATE"),
            },
        ],
        scenarios: &[
            Scenario {
                id: "project-deadline",
                name: "Project Timeline",
                description: "How many actual working days do we have?",
                values: &[("start_date", "A2"), ("end_date", "B2")],
            },
            Scenario {
                id: "employee-tenure",
                name: "Employee Tenure",
                description: "Calculate years of service for reviews or PTO",
                values: &[("start_date", "A2"), ("end_date", "TODAY()"), ("unit", "\"Y\"")],
            },
            Scenario {
                id: "contract-renewal",
                name: "Contract Renewal Date",
                description: "When does this 12-month contract expire?",
                values: &[("start_date", "A2"), ("months", "12")],
            },
        ],
        rich_content: include_str!("../content/solution-hr-time-calculator.html"),
    },
    Solution {
        slug: "loan-calculator",
        title: "Loan Payment Calculator | Mortgage, Auto & Personal",
        meta_description: "Calculate your monthly payment for mortgages, car loans, and personal loans. See exactly what you'll pay with different rates and terms.",
        icon: "Banknote",
        description: "Figure out monthly payments for any loan type",
        tools: &[
            Tool {
                id: "mortgage",
                name: "Mortgage Payment",
                description: "Calculate your monthly house payment",
                formula_slug: "pmt",
                inputs: &[
                    InputSpec::number("annual_rate", "Interest Rate (%)").placeholder("e.g., 6.875"),
                    InputSpec::number("years", "Loan Term (years)").placeholder("e.g., 30"),
                    InputSpec::number("principal", "Loan Amount ($)").placeholder("e.g., 350000"),
                ],
                generator: Generator::Custom(payment_over_years),
            },
            Tool {
                id: "car-loan",
                name: "Auto Loan Payment",
                description: "Calculate your monthly car payment",
                formula_slug: "pmt",
                inputs: &[
                    InputSpec::number("annual_rate", "Interest Rate (%)").placeholder("e.g., 5.49"),
                    InputSpec::number("years", "Loan Term (years)").placeholder("e.g., 5"),
                    InputSpec::number("principal", "Amount Financed ($)").placeholder("e.g., 32000"),
                ],
                generator: Generator::Custom(payment_over_years),
            },
            Tool {
                id: "personal-loan",
                name: "Personal Loan Payment",
                description: "Calculate payments for personal/unsecured loans",
                formula_slug: "pmt",
                inputs: &[
                    InputSpec::number("annual_rate", "Interest Rate (%)").placeholder("e.g., 11.5"),
                    InputSpec::number("months", "Loan Term (months)").placeholder("e.g., 36"),
                    InputSpec::number("principal", "Loan Amount ($)").placeholder("e.g., 10000"),
                ],
                generator: Generator::Custom(payment_over_months),
            },
        ],
        scenarios: &[
            Scenario {
                id: "starter-home",
                name: "First Home (30-year)",
                description: "Typical first-time homebuyer scenario",
                values: &[("annual_rate", "6.875"), ("years", "30"), ("principal", "350000")],
            },
            Scenario {
                id: "new-car",
                name: "New Car (60 months)",
                description: "Standard 5-year auto financing",
                values: &[("annual_rate", "5.49"), ("years", "5"), ("principal", "32000")],
            },
            Scenario {
                id: "debt-consolidation",
                name: "Debt Consolidation",
                description: "Personal loan to pay off credit cards",
                values: &[("annual_rate", "11.5"), ("months", "36"), ("principal", "15000")],
            },
        ],
        rich_content: include_str!("../content/solution-loan-calculator.html"),
    },
    Solution {
        slug: "multi-criteria-analysis",
        title: "SUMIFS & COUNTIFS Generator | Conditional Formulas",
        meta_description: "Build SUMIFS and COUNTIFS formulas to analyze data with multiple conditions. Sum sales by region and product, count leads by status and source.",
        icon: "Calculator",
        description: "Sum & count data with multiple filters",
        tools: &[
            Tool {
                id: "sumifs",
                name: "Sum with Multiple Conditions",
                description: "Add up values that match several criteria",
                formula_slug: "sumifs",
                inputs: &[
                    InputSpec::range("sum_range", "Numbers to Sum").placeholder("e.g., D:D (revenue column)"),
                    InputSpec::range("criteria_range1", "Filter Column 1").placeholder("e.g., A:A (region)"),
                    InputSpec::text("criteria1", "Filter Value 1").placeholder("e.g., \"West\""),
                    InputSpec::range("criteria_range2", "Filter Column 2").placeholder("e.g., B:B (product)"),
                    InputSpec::text("criteria2", "Filter Value 2").placeholder("e.g., \"Pro Plan\""),
                ],
                generator: Generator::Call("SUMIFS"),
            },
            Tool {
                id: "countifs",
                name: "Count with Multiple Conditions",
                description: "Count rows that match several criteria",
                formula_slug: "countifs",
                inputs: &[
                    InputSpec::range("criteria_range1", "Filter Column 1").placeholder("e.g., A:A (status)"),
                    InputSpec::text("criteria1", "Filter Value 1").placeholder("e.g., \"Won\""),
                    InputSpec::range("criteria_range2", "Filter Column 2").placeholder("e.g., B:B (source)"),
                    InputSpec::text("criteria2", "Filter Value 2").placeholder("e.g., \"Referral\""),
                ],
                generator: Generator::Call("COUNTIFS"),
            },
            Tool {
                id: "iferror",
                name: "Handle Errors Gracefully",
                description: "Show a custom message instead of ugly errors",
                formula_slug: "iferror",
                inputs: &[
                    InputSpec::text("formula", "Your Formula")
                        .placeholder("e.g., A1/B1 or VLOOKUP(...)")
                        .fallback("your_formula"),
                    InputSpec::text("error_value", "Show Instead of Error")
                        .placeholder("e.g., \"N/A\" or 0")
                        .fallback("\"\""),
                ],
                generator: Generator::Call("IFERROR"),
            },
        ],
        scenarios: &[
            Scenario {
                id: "sales-by-region",
                name: "Sales by Region & Product",
                description: "Total revenue for West region, Pro Plan only",
                values: &[
                    ("sum_range", "D:D"),
                    ("criteria_range1", "A:A"),
                    ("criteria1", "\"West\""),
                    ("criteria_range2", "B:B"),
                    ("criteria2", "\"Pro Plan\""),
                ],
            },
            Scenario {
                id: "lead-conversion",
                name: "Lead Conversion Analysis",
                description: "Count won deals from referrals",
                values: &[
                    ("criteria_range1", "C:C"),
                    ("criteria1", "\"Won\""),
                    ("criteria_range2", "D:D"),
                    ("criteria2", "\"Referral\""),
                ],
            },
            Scenario {
                id: "clean-reports",
                name: "Clean Up Report Errors",
                description: "Replace #N/A with \"Not Found\"",
                values: &[
                    ("formula", "VLOOKUP(A2, Data!A:B, 2, FALSE)"),
                    ("error_value", "\"Not Found\""),
                ],
            },
        ],
        rich_content: include_str!("../content/solution-multi-criteria-analysis.html"),
    },
];

const TENURE_UNITS: &[SelectOption] = &[
    SelectOption::new("Years (for tenure)", "\"Y\""),
    SelectOption::new("Months (total)", "\"M\""),
    SelectOption::new("Days (total)", "\"D\""),
    SelectOption::new("Months (after full years)", "\"YM\""),
    SelectOption::new("Days (after full months)", "\"MD\""),
];

/// `annual_rate%/12`, or the symbolic `annual_rate/12` when unset.
fn monthly_rate(p: &Params) -> String {
    match provided(p, "annual_rate") {
        Some(rate) => format!("{}%/12", rate),
        None => "annual_rate/12".to_string(),
    }
}

/// Monthly payment for a term given in years. The principal is negated so
/// the payment comes out positive.
fn payment_over_years(p: &Params) -> String {
    let nper = match provided(p, "years") {
        Some(years) => format!("{}*12", years),
        None => "years*12".to_string(),
    };
    format!(
        "=PMT({}, {}, -{})",
        monthly_rate(p),
        nper,
        value_or(p, "principal", "principal")
    )
}

/// Monthly payment for a term given in months.
fn payment_over_months(p: &Params) -> String {
    format!(
        "=PMT({}, {}, -{})",
        monthly_rate(p),
        value_or(p, "months", "months"),
        value_or(p, "principal", "principal")
    )
}
