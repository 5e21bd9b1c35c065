//! Built-in Excel proficiency question set.
//!
//! Fifteen questions across three tiers. Kept as plain data so a deployment
//! can swap in its own catalog file without touching selection logic.

use super::QuestionRecord;
use crate::assessment::DifficultyTier;
use std::collections::HashMap;

fn record(
    id: &str,
    category: &str,
    difficulty: DifficultyTier,
    prompt: &str,
    expected_points: &[&str],
    evaluation_criteria: &str,
) -> QuestionRecord {
    QuestionRecord {
        id: id.to_string(),
        category: category.to_string(),
        difficulty,
        prompt: prompt.to_string(),
        expected_points: expected_points.iter().map(|s| s.to_string()).collect(),
        evaluation_criteria: evaluation_criteria.to_string(),
    }
}

pub(super) fn excel_questions() -> Vec<QuestionRecord> {
    use DifficultyTier::{Advanced, Basic, Intermediate};

    vec![
        record(
            "basic_001",
            "Formulas & Functions",
            Basic,
            "How would you calculate the sum of values in cells A1 to A10? What if you wanted \
             to exclude any text values in that range?",
            &[
                "Use SUM(A1:A10) for basic sum",
                "Can mention SUM function ignores text automatically",
                "Alternative approaches like using array formulas",
            ],
            "Look for correct SUM syntax and understanding of function behavior",
        ),
        record(
            "basic_002",
            "Data Management",
            Basic,
            "You have a list of customer names in column A with some duplicates. How would you \
             identify and remove the duplicate entries?",
            &[
                "Data tab -> Remove Duplicates feature",
                "Conditional formatting to highlight duplicates",
                "Using filters or advanced filters",
            ],
            "Understanding of Excel's data cleaning capabilities",
        ),
        record(
            "basic_003",
            "Cell Formatting",
            Basic,
            "Explain how you would format a column of numbers to display as currency with two \
             decimal places. What if you wanted different currencies for different rows?",
            &[
                "Right-click -> Format Cells -> Currency",
                "Custom number format codes",
                "Using different currency symbols",
            ],
            "Knowledge of formatting options and flexibility",
        ),
        record(
            "basic_004",
            "Basic Functions",
            Basic,
            "What's the difference between AVERAGE() and MEDIAN() functions? When would you use \
             each one?",
            &[
                "AVERAGE calculates arithmetic mean",
                "MEDIAN finds middle value",
                "Understanding when each is more appropriate",
            ],
            "Statistical understanding and practical application",
        ),
        record(
            "basic_005",
            "Data Entry",
            Basic,
            "How would you quickly fill a series of dates (like every Monday for the next 12 \
             weeks) in Excel?",
            &[
                "Fill Series feature",
                "AutoFill with drag",
                "Understanding date arithmetic",
            ],
            "Efficiency in data entry techniques",
        ),
        record(
            "inter_001",
            "Pivot Tables",
            Intermediate,
            "Walk me through creating a pivot table from a sales data set. How would you show \
             total sales by region and product category, and then add a filter for specific \
             time periods?",
            &[
                "Insert -> Pivot Table process",
                "Drag fields to appropriate areas",
                "Adding filters and slicers",
                "Grouping dates by periods",
            ],
            "Comprehensive understanding of pivot table creation and customization",
        ),
        record(
            "inter_002",
            "Advanced Formulas",
            Intermediate,
            "You need to look up an employee's salary based on their ID, but the ID might not \
             exist. How would you handle this scenario and return 'Not Found' if the ID doesn't \
             exist?",
            &[
                "VLOOKUP with IFERROR",
                "INDEX/MATCH combination",
                "Error handling strategies",
                "Mention of XLOOKUP if familiar",
            ],
            "Error handling and advanced lookup techniques",
        ),
        record(
            "inter_003",
            "Conditional Logic",
            Intermediate,
            "Create a formula that assigns letter grades (A, B, C, D, F) based on numerical \
             scores, where A=90+, B=80-89, C=70-79, D=60-69, F=below 60.",
            &[
                "Nested IF statements",
                "IFS function (newer Excel)",
                "LOOKUP table approach",
                "Proper logical structure",
            ],
            "Complex conditional logic implementation",
        ),
        record(
            "inter_004",
            "Data Analysis",
            Intermediate,
            "You have monthly sales data for 3 years. How would you identify trends, \
             seasonality, and create a forecast for the next 6 months?",
            &[
                "Charts for visualization",
                "TREND or FORECAST functions",
                "Moving averages",
                "Data analysis toolpack features",
            ],
            "Analytical thinking and forecasting knowledge",
        ),
        record(
            "inter_005",
            "Charts & Visualization",
            Intermediate,
            "How would you create a dashboard showing KPI metrics with dynamic charts that \
             update based on dropdown selections?",
            &[
                "Data validation for dropdowns",
                "Dynamic named ranges or tables",
                "Chart data source linking",
                "Dashboard design principles",
            ],
            "Integration of multiple Excel features for dynamic reporting",
        ),
        record(
            "adv_001",
            "VBA & Automation",
            Advanced,
            "How would you automate a monthly reporting process that involves importing data, \
             cleaning it, creating pivot tables, and generating charts? Walk me through your \
             VBA approach.",
            &[
                "VBA macro structure",
                "Data import methods",
                "Object manipulation",
                "Error handling in VBA",
                "User interface considerations",
            ],
            "Programming logic and automation understanding",
        ),
        record(
            "adv_002",
            "Array Formulas",
            Advanced,
            "Explain how you would use array formulas to find the top 3 sales values and their \
             corresponding salesperson names from a large dataset without using helper columns.",
            &[
                "LARGE function for top values",
                "INDEX/MATCH with array logic",
                "Dynamic arrays (if Office 365)",
                "CSE array formula entry",
            ],
            "Advanced array formula concepts and implementation",
        ),
        record(
            "adv_003",
            "Data Modeling",
            Advanced,
            "You're building a financial model with scenario analysis. How would you structure \
             it to allow easy switching between best case, worst case, and most likely \
             scenarios?",
            &[
                "Data tables for scenarios",
                "Input cells and assumptions",
                "INDIRECT or OFFSET functions",
                "Model structure best practices",
                "Sensitivity analysis",
            ],
            "Financial modeling expertise and structural thinking",
        ),
        record(
            "adv_004",
            "Power Query",
            Advanced,
            "How would you use Power Query to combine multiple CSV files with similar \
             structures, clean the data, and create relationships for analysis?",
            &[
                "Get Data from folder",
                "Data transformation steps",
                "Append queries",
                "Data types and cleaning",
                "Loading to data model",
            ],
            "Modern Excel data processing capabilities",
        ),
        record(
            "adv_005",
            "Complex Analysis",
            Advanced,
            "Design a solution for tracking project budgets vs actuals with variance analysis, \
             alerts for budget overruns, and automatic escalation reporting.",
            &[
                "Conditional formatting for alerts",
                "Complex formulas for variance",
                "Dashboard design",
                "Automated reporting features",
                "Integration considerations",
            ],
            "Business process integration and complex problem solving",
        ),
    ]
}

/// Follow-up prompt pools for categories that have them.
pub(super) fn follow_up_pools() -> HashMap<String, Vec<String>> {
    let pools: [(&str, &[&str]); 3] = [
        (
            "Formulas & Functions",
            &[
                "Can you explain the difference between relative and absolute references?",
                "How would you handle errors in your formulas?",
                "What are some common Excel functions you use regularly?",
            ],
        ),
        (
            "Data Analysis",
            &[
                "How do you validate your analysis results?",
                "What visualization would best represent this data?",
                "How would you automate this analysis process?",
            ],
        ),
        (
            "Pivot Tables",
            &[
                "How would you handle missing data in a pivot table?",
                "Can you explain pivot table refresh vs. rebuild?",
                "What are some advanced pivot table features you've used?",
            ],
        ),
    ];

    pools
        .into_iter()
        .map(|(category, prompts)| {
            (
                category.to_string(),
                prompts.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}
