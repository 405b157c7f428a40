//! The formula catalog.
//!
//! Order matters: it is the order of the home page grid and of search
//! results.

use crate::engine::provided;
use crate::types::{Category, Formula, Generator, InputSpec, Params, SelectOption};

/// Every formula generator, in display order.
pub static FORMULAS: &[Formula] = &[
    Formula::new(
        "vlookup",
        "VLOOKUP",
        Category::Lookup,
        "Looks for a value in the leftmost column of a table, and then returns a value in the same row from a column you specify.",
        &[
            InputSpec::text("lookup_value", "Value to Look For").placeholder("e.g., A2"),
            InputSpec::range("table_array", "Search Range").placeholder("e.g., Sheet2!A:E"),
            InputSpec::number("col_index", "Return Column Number").placeholder("e.g., 3"),
            InputSpec::select("range_lookup", "Match Type", MATCH_EXACT_APPROX).fallback("FALSE"),
        ],
        Generator::Call("VLOOKUP"),
    )
    .meta("Instantly generate VLOOKUP formulas for Excel and Google Sheets without memorizing syntax.")
    .rich(include_str!("../content/formula-vlookup.html")),
    Formula::new(
        "if",
        "IF",
        Category::Logic,
        "Checks whether a condition is met, and returns one value if true and another value if false.",
        &[
            InputSpec::text("logical_test", "Test").placeholder("e.g., A1>10").fallback("condition"),
            InputSpec::text("value_if_true", "If True").placeholder("e.g., \"Pass\""),
            InputSpec::text("value_if_false", "If False").placeholder("e.g., \"Fail\""),
        ],
        Generator::Call("IF"),
    )
    .meta("Create complex IF statements for Excel and Google Sheets easily.")
    .rich(include_str!("../content/formula-if.html")),
    Formula::new(
        "sumif",
        "SUMIF",
        Category::Math,
        "Adds the cells specified by a given condition or criteria.",
        &[
            InputSpec::range("range", "Range to check").placeholder("e.g., A1:A10"),
            InputSpec::text("criteria", "Criteria").placeholder("e.g., \">100\" or \"Apple\""),
            InputSpec::range("sum_range", "Range to sum - optional")
                .placeholder("e.g., B1:B10")
                .optional(),
        ],
        Generator::Call("SUMIF"),
    )
    .meta("Generate SUMIF formulas to sum cells based on specific criteria."),
    Formula::new(
        "countif",
        "COUNTIF",
        Category::Math,
        "Counts the number of cells within a range that meet the given condition.",
        &[
            InputSpec::range("range", "Range to Count").placeholder("e.g., A1:A10"),
            InputSpec::text("criteria", "Criteria").placeholder("e.g., \">100\" or \"Completed\""),
        ],
        Generator::Call("COUNTIF"),
    )
    .meta("Count cells that meet a specific criterion with this free tool."),
    Formula::new(
        "concatenate",
        "CONCATENATE",
        Category::Text,
        "Joins several text strings into one text string.",
        &[
            InputSpec::text("text1", "Text 1").placeholder("e.g., A1"),
            InputSpec::text("text2", "Text 2").placeholder("e.g., B1"),
            InputSpec::text("text3", "Text 3 (Optional)")
                .placeholder("e.g., \" - \"")
                .optional(),
        ],
        Generator::Custom(concatenate),
    )
    .meta("Join multiple text strings into one text string."),
    Formula::new(
        "index-match",
        "INDEX/MATCH",
        Category::Lookup,
        "A more flexible alternative to VLOOKUP. Returns the value of an element in a table or an array, selected by the row and column number indexes.",
        &[
            InputSpec::range("return_range", "Column to Return Value From").placeholder("e.g., C:C"),
            InputSpec::text("lookup_value", "Value to Look For").placeholder("e.g., A2"),
            InputSpec::range("lookup_range", "Column to Search In").placeholder("e.g., B:B"),
            InputSpec::select("match_type", "Match Type", MATCH_TYPES).fallback("0"),
        ],
        Generator::Pattern(
            "=INDEX({{return_range}}, MATCH({{lookup_value}}, {{lookup_range}}, {{match_type}}))",
        ),
    )
    .title("Free INDEX & MATCH Generator")
    .meta("Generate the powerful INDEX MATCH formula combination for advanced lookups."),
    Formula::new(
        "xlookup",
        "XLOOKUP",
        Category::Lookup,
        "Searches a range or an array, and then returns the item corresponding to the first match it finds. If no match exists, then XLOOKUP can return the closest (approximate) match.",
        &[
            InputSpec::text("lookup_value", "Lookup Value").placeholder("e.g., A2"),
            InputSpec::range("lookup_array", "Lookup Array").placeholder("e.g., B:B"),
            InputSpec::range("return_array", "Return Array").placeholder("e.g., C:C"),
            InputSpec::text("if_not_found", "If Not Found (Optional)")
                .placeholder("e.g., \"Not Found\"")
                .optional(),
        ],
        Generator::Call("XLOOKUP"),
    )
    .meta("Generate XLOOKUP formulas, the modern replacement for VLOOKUP.")
    .rich(include_str!("../content/formula-xlookup.html")),
    single("trim", "TRIM", Category::Text, "Removes all spaces from text except for single spaces between words.", TEXT_ARG)
        .meta("Remove extra spaces from text with the TRIM function."),
    single("upper", "UPPER", Category::Text, "Converts text to uppercase.", TEXT_ARG)
        .meta("Convert text to uppercase."),
    single("lower", "LOWER", Category::Text, "Converts all uppercase letters in a text string to lowercase.", TEXT_ARG)
        .meta("Convert text to lowercase."),
    single("proper", "PROPER", Category::Text, "Capitalizes the first letter in each word of a text value.", TEXT_ARG)
        .meta("Capitalize the first letter of each word."),
    Formula::new(
        "left",
        "LEFT",
        Category::Text,
        "Returns the first character or characters in a text string, based on the number of characters you specify.",
        TEXT_AND_COUNT,
        Generator::Call("LEFT"),
    ),
    Formula::new(
        "right",
        "RIGHT",
        Category::Text,
        "Returns the last character or characters in a text string, based on the number of characters you specify.",
        TEXT_AND_COUNT,
        Generator::Call("RIGHT"),
    ),
    Formula::new(
        "datedif",
        "DATEDIF",
        Category::Date,
        "Calculates the number of days, months, or years between two dates.",
        &[
            InputSpec::text("start_date", "Start Date").placeholder("e.g., A1"),
            InputSpec::text("end_date", "End Date").placeholder("e.g., B1"),
            InputSpec::select("unit", "Unit", DATE_UNITS).fallback("\"Y\""),
        ],
        Generator::Call("DATEDIF"),
    )
    .meta("Calculate the difference between two dates."),
    Formula::new(
        "now",
        "NOW",
        Category::Date,
        "Returns the serial number of the current date and time.",
        &[],
        Generator::Call("NOW"),
    ),
    Formula::new(
        "today",
        "TODAY",
        Category::Date,
        "Returns the serial number of the current date.",
        &[],
        Generator::Call("TODAY"),
    ),
    Formula::new(
        "networkdays",
        "NETWORKDAYS",
        Category::Date,
        "Returns the number of whole working days between start_date and end_date.",
        &[
            InputSpec::text("start_date", "Start Date").placeholder("e.g., A1"),
            InputSpec::text("end_date", "End Date").placeholder("e.g., B1"),
            InputSpec::range("holidays", "Holidays (Optional)")
                .placeholder("e.g., H1:H10")
                .optional(),
        ],
        Generator::Call("NETWORKDAYS"),
    )
    .meta("Calculate the number of working days between two dates."),
    Formula::new(
        "pmt",
        "PMT",
        Category::Math,
        "Calculates the payment for a loan based on constant payments and a constant interest rate.",
        &[
            InputSpec::text("rate", "Interest Rate").placeholder("e.g., 5%/12"),
            InputSpec::text("nper", "Number of Payments").placeholder("e.g., 60"),
            InputSpec::text("pv", "Present Value (Loan Amount)").placeholder("e.g., 10000"),
        ],
        Generator::Call("PMT"),
    )
    .meta("Calculate loan payments with the PMT function."),
    Formula::new(
        "and",
        "AND",
        Category::Logic,
        "Returns TRUE if all its arguments are TRUE; returns FALSE if one or more argument is FALSE.",
        TWO_CONDITIONS,
        Generator::Call("AND"),
    ),
    Formula::new(
        "or",
        "OR",
        Category::Logic,
        "Returns TRUE if any argument is TRUE; returns FALSE if all arguments are FALSE.",
        TWO_CONDITIONS,
        Generator::Call("OR"),
    ),
    Formula::new(
        "extract-email",
        "REGEXEXTRACT",
        Category::Text,
        "Extracts an email address from a text string.",
        &[InputSpec::text("target_cell", "Target Cell").placeholder("e.g., A2").fallback("A2")],
        Generator::Pattern(
            r#"=REGEXEXTRACT({{target_cell}}, "[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")"#,
        ),
    )
    .title("Extract Email Address from Text")
    .meta("Extract email addresses from text cells using REGEXEXTRACT.")
    .rich(include_str!("../content/formula-extract-email.html")),
    Formula::new(
        "extract-domain",
        "REGEXEXTRACT",
        Category::Text,
        "Extracts the domain part from a URL.",
        &[InputSpec::text("target_cell", "URL Cell").placeholder("e.g., A2").fallback("A2")],
        Generator::Pattern(r#"=REGEXEXTRACT({{target_cell}}, "^(?:https?:\/\/)?(?:www\.)?([^\/]+)")"#),
    )
    .title("Extract Domain from URL")
    .meta("Extract the domain name from a URL.")
    .rich(include_str!("../content/formula-extract-domain.html")),
    Formula::new(
        "get-first-word",
        "LEFT & FIND",
        Category::Text,
        "Returns the first word in a text string.",
        &[InputSpec::text("target_cell", "Target Cell").placeholder("e.g., A2").fallback("A2")],
        Generator::Pattern("=LEFT({{target_cell}}, FIND(\" \", {{target_cell}}) - 1)"),
    )
    .title("Get First Word from Text")
    .meta("Extract the first word from a text string.")
    .rich(include_str!("../content/formula-get-first-word.html")),
    Formula::new(
        "remove-first-3-chars",
        "RIGHT & LEN",
        Category::Text,
        "Removes the specified number of characters from the beginning of a text string.",
        &[
            InputSpec::text("target_cell", "Target Cell").placeholder("e.g., A2").fallback("A2"),
            InputSpec::number("num_chars", "Number of chars to remove")
                .placeholder("e.g., 3")
                .fallback("3"),
        ],
        Generator::Pattern("=RIGHT({{target_cell}}, LEN({{target_cell}}) - {{num_chars}})"),
    )
    .title("Remove First N Characters")
    .meta("Remove the first N characters from a text string."),
    Formula::new(
        "sumifs",
        "SUMIFS",
        Category::Math,
        "Adds all cells that meet multiple criteria. More powerful than SUMIF for complex conditions.",
        &[
            InputSpec::range("sum_range", "Sum Range").placeholder("e.g., C1:C100"),
            InputSpec::range("criteria_range1", "Criteria Range 1").placeholder("e.g., A1:A100"),
            InputSpec::text("criteria1", "Criteria 1").placeholder("e.g., \"Sales\""),
            InputSpec::range("criteria_range2", "Criteria Range 2").placeholder("e.g., B1:B100"),
            InputSpec::text("criteria2", "Criteria 2").placeholder("e.g., \">1000\""),
        ],
        Generator::Call("SUMIFS"),
    )
    .meta("Generate SUMIFS formulas to sum cells based on multiple criteria in Excel and Google Sheets.")
    .rich(include_str!("../content/formula-sumifs.html")),
    Formula::new(
        "countifs",
        "COUNTIFS",
        Category::Math,
        "Counts cells that meet multiple criteria. Essential for data analysis with complex conditions.",
        &[
            InputSpec::range("criteria_range1", "Criteria Range 1").placeholder("e.g., A1:A100"),
            InputSpec::text("criteria1", "Criteria 1").placeholder("e.g., \"Completed\""),
            InputSpec::range("criteria_range2", "Criteria Range 2").placeholder("e.g., B1:B100"),
            InputSpec::text("criteria2", "Criteria 2").placeholder("e.g., \">500\""),
        ],
        Generator::Call("COUNTIFS"),
    )
    .meta("Generate COUNTIFS formulas to count cells based on multiple criteria."),
    Formula::new(
        "averageif",
        "AVERAGEIF",
        Category::Math,
        "Returns the average of all cells in a range that meet a given criteria.",
        &[
            InputSpec::range("range", "Range to Check").placeholder("e.g., A1:A100"),
            InputSpec::text("criteria", "Criteria").placeholder("e.g., \">0\" or \"Sales\""),
            InputSpec::range("average_range", "Average Range (Optional)")
                .placeholder("e.g., B1:B100")
                .optional(),
        ],
        Generator::Call("AVERAGEIF"),
    )
    .meta("Calculate the average of cells that meet a specific criterion."),
    Formula::new(
        "iferror",
        "IFERROR",
        Category::Logic,
        "Returns a value you specify if a formula evaluates to an error; otherwise returns the result of the formula.",
        &[
            InputSpec::text("value", "Formula to Check").placeholder("e.g., A1/B1"),
            InputSpec::text("value_if_error", "Value if Error")
                .placeholder("e.g., 0 or \"N/A\"")
                .fallback("\"\""),
        ],
        Generator::Call("IFERROR"),
    )
    .meta("Handle errors gracefully in Excel and Google Sheets with IFERROR.")
    .rich(include_str!("../content/formula-iferror.html")),
    Formula::new(
        "ifs",
        "IFS",
        Category::Logic,
        "Checks multiple conditions and returns a value corresponding to the first TRUE condition. Cleaner than nested IFs.",
        &[
            InputSpec::text("condition1", "Condition 1").placeholder("e.g., A1>=90"),
            InputSpec::text("value1", "Value if True 1").placeholder("e.g., \"A\""),
            InputSpec::text("condition2", "Condition 2").placeholder("e.g., A1>=80"),
            InputSpec::text("value2", "Value if True 2").placeholder("e.g., \"B\""),
            InputSpec::text("condition3", "Condition 3").placeholder("e.g., A1>=70"),
            InputSpec::text("value3", "Value if True 3").placeholder("e.g., \"C\""),
        ],
        Generator::Call("IFS"),
    )
    .meta("Generate IFS formulas for multiple conditions without nested IFs."),
    Formula::new(
        "substitute",
        "SUBSTITUTE",
        Category::Text,
        "Substitutes new text for old text in a text string. Great for data cleaning.",
        &[
            InputSpec::text("text", "Text").placeholder("e.g., A1"),
            InputSpec::text("old_text", "Old Text").placeholder("e.g., \"-\"").fallback("\"old\""),
            InputSpec::text("new_text", "New Text").placeholder("e.g., \"/\"").fallback("\"new\""),
        ],
        Generator::Call("SUBSTITUTE"),
    )
    .meta("Replace text within a string using the SUBSTITUTE function."),
    Formula::new(
        "mid",
        "MID",
        Category::Text,
        "Returns a specific number of characters from a text string, starting at the position you specify.",
        &[
            InputSpec::text("text", "Text").placeholder("e.g., A1"),
            InputSpec::number("start_num", "Start Position").placeholder("e.g., 3").fallback("1"),
            InputSpec::number("num_chars", "Number of Characters").placeholder("e.g., 5").fallback("1"),
        ],
        Generator::Call("MID"),
    ),
    single("len", "LEN", Category::Text, "Returns the number of characters in a text string.", TEXT_ARG),
    Formula::new(
        "find",
        "FIND",
        Category::Text,
        "Returns the starting position of one text string within another (case-sensitive).",
        &[
            InputSpec::text("find_text", "Text to Find").placeholder("e.g., \"@\""),
            InputSpec::text("within_text", "Within Text").placeholder("e.g., A1"),
        ],
        Generator::Call("FIND"),
    ),
    Formula::new(
        "search",
        "SEARCH",
        Category::Text,
        "Returns the position of a text string within another (case-insensitive). Supports wildcards.",
        &[
            InputSpec::text("find_text", "Text to Find").placeholder("e.g., \"error\""),
            InputSpec::text("within_text", "Within Text").placeholder("e.g., A1"),
        ],
        Generator::Call("SEARCH"),
    ),
    Formula::new(
        "text",
        "TEXT",
        Category::Text,
        "Converts a value to text in a specific number format.",
        &[
            InputSpec::text("value", "Value").placeholder("e.g., A1"),
            InputSpec::select("format", "Format", NUMBER_FORMATS).fallback("\"#,##0\""),
        ],
        Generator::Call("TEXT"),
    )
    .meta("Format numbers as text with custom number formats."),
    Formula::new(
        "round",
        "ROUND",
        Category::Math,
        "Rounds a number to a specified number of digits.",
        &[
            InputSpec::text("number", "Number").placeholder("e.g., A1"),
            InputSpec::number("num_digits", "Decimal Places").placeholder("e.g., 2").fallback("0"),
        ],
        Generator::Call("ROUND"),
    )
    .meta("Round numbers to a specified number of decimal places."),
    Formula::new(
        "roundup",
        "ROUNDUP",
        Category::Math,
        "Rounds a number up, away from zero.",
        ROUNDING,
        Generator::Call("ROUNDUP"),
    )
    .meta("Round numbers up, away from zero."),
    Formula::new(
        "rounddown",
        "ROUNDDOWN",
        Category::Math,
        "Rounds a number down, toward zero.",
        ROUNDING,
        Generator::Call("ROUNDDOWN"),
    )
    .meta("Round numbers down, toward zero."),
    single("abs", "ABS", Category::Math, "Returns the absolute value of a number (removes the negative sign).", NUMBER_ARG)
        .meta("Get the absolute value of a number."),
    single("max", "MAX", Category::Math, "Returns the largest value in a set of values.", RANGE_ARG)
        .meta("Find the largest value in a range of cells."),
    single("min", "MIN", Category::Math, "Returns the smallest value in a set of values.", RANGE_ARG)
        .meta("Find the smallest value in a range of cells."),
    single("average", "AVERAGE", Category::Math, "Returns the average (arithmetic mean) of the arguments.", RANGE_ARG)
        .meta("Calculate the average of a range of numbers."),
    single("sum", "SUM", Category::Math, "Adds all the numbers in a range of cells.", RANGE_ARG)
        .meta("Add up all numbers in a range of cells."),
    single("year", "YEAR", Category::Date, "Returns the year of a date, an integer in the range 1900-9999.", DATE_ARG)
        .meta("Extract the year from a date."),
    single("month", "MONTH", Category::Date, "Returns the month of a date, a number from 1 (January) to 12 (December).", DATE_ARG)
        .meta("Extract the month from a date."),
    single("day", "DAY", Category::Date, "Returns the day of a date, a number from 1 to 31.", DATE_ARG)
        .meta("Extract the day from a date."),
    Formula::new(
        "edate",
        "EDATE",
        Category::Date,
        "Returns a date that is a specified number of months before or after a given date.",
        &[
            InputSpec::text("start_date", "Start Date").placeholder("e.g., A1"),
            InputSpec::number("months", "Months to Add").placeholder("e.g., 3 or -6").fallback("1"),
        ],
        Generator::Call("EDATE"),
    )
    .meta("Add or subtract months from a date."),
    Formula::new(
        "eomonth",
        "EOMONTH",
        Category::Date,
        "Returns the last day of the month a specified number of months before or after a date.",
        &[
            InputSpec::text("start_date", "Start Date").placeholder("e.g., A1"),
            InputSpec::number("months", "Month Offset")
                .placeholder("e.g., 0 for current month")
                .fallback("0"),
        ],
        Generator::Call("EOMONTH"),
    )
    .meta("Get the last day of a month, with optional month offset."),
    single("counta", "COUNTA", Category::Math, "Counts number of cells that are not empty in a range.", RANGE_ARG)
        .meta("Count number of non-empty cells in a range."),
    single("countblank", "COUNTBLANK", Category::Math, "Counts the number of empty cells in a specified range.", RANGE_ARG)
        .meta("Count number of empty cells in a range."),
];

// ---------------------------------------------------------------------------
// Shared input schemas
// ---------------------------------------------------------------------------

const TEXT_ARG: &[InputSpec] = &[InputSpec::text("text", "Text").placeholder("e.g., A1")];
const NUMBER_ARG: &[InputSpec] = &[InputSpec::text("number", "Number").placeholder("e.g., A1")];
const RANGE_ARG: &[InputSpec] = &[InputSpec::range("range", "Range").placeholder("e.g., A1")];
const DATE_ARG: &[InputSpec] = &[InputSpec::text("date", "Date").placeholder("e.g., A1")];

const TEXT_AND_COUNT: &[InputSpec] = &[
    InputSpec::text("text", "Text").placeholder("e.g., A1"),
    InputSpec::number("num_chars", "Number of Characters")
        .placeholder("e.g., 5")
        .fallback("1"),
];

const TWO_CONDITIONS: &[InputSpec] = &[
    InputSpec::text("logical1", "Condition 1").placeholder("e.g., A1>0"),
    InputSpec::text("logical2", "Condition 2").placeholder("e.g., B1<10"),
];

const ROUNDING: &[InputSpec] = &[
    InputSpec::text("number", "Number").placeholder("e.g., A1"),
    InputSpec::number("num_digits", "Decimal Places")
        .placeholder("e.g., 0")
        .fallback("0"),
];

const MATCH_EXACT_APPROX: &[SelectOption] = &[
    SelectOption::new("Exact Match (False)", "FALSE"),
    SelectOption::new("Approximate Match (True)", "TRUE"),
];

const MATCH_TYPES: &[SelectOption] = &[
    SelectOption::new("Exact Match (0)", "0"),
    SelectOption::new("Less Than (-1)", "-1"),
    SelectOption::new("Greater Than (1)", "1"),
];

const DATE_UNITS: &[SelectOption] = &[
    SelectOption::new("Years (\"Y\")", "\"Y\""),
    SelectOption::new("Months (\"M\")", "\"M\""),
    SelectOption::new("Days (\"D\")", "\"D\""),
];

const NUMBER_FORMATS: &[SelectOption] = &[
    SelectOption::new("Number (1,234.56)", "\"#,##0.00\""),
    SelectOption::new("Currency ($1,234)", "\"$#,##0\""),
    SelectOption::new("Percentage (12.5%)", "\"0.0%\""),
    SelectOption::new("Date (YYYY-MM-DD)", "\"YYYY-MM-DD\""),
    SelectOption::new("Date (MM/DD/YYYY)", "\"MM/DD/YYYY\""),
    SelectOption::new("Time (HH:MM:SS)", "\"HH:MM:SS\""),
];

/// A one-argument `=FN(arg)` generator.
const fn single(
    slug: &'static str,
    function: &'static str,
    category: Category,
    description: &'static str,
    input: &'static [InputSpec],
) -> Formula {
    Formula::new(slug, function, category, description, input, Generator::Call(function))
}

/// CONCATENATE interleaves a `", "` literal between the parts. With nothing
/// typed at all it renders an empty call.
fn concatenate(p: &Params) -> String {
    let text3 = provided(p, "text3");
    if provided(p, "text1").is_none() && provided(p, "text2").is_none() && text3.is_none() {
        return "=CONCATENATE()".to_string();
    }

    let t1 = provided(p, "text1").unwrap_or("text1");
    let t2 = provided(p, "text2").unwrap_or("text2");
    let mut args = format!("{}, \", \", {}", t1, t2);
    if let Some(t3) = text3 {
        args.push_str(&format!(", \", \", {}", t3));
    }
    format!("=CONCATENATE({})", args)
}
