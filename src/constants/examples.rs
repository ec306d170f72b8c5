//! Demo fixtures that bulk-populate the questionnaire.
//!
//! One fixture per system type, keyed by the sub-question value. Loading a
//! fixture must run the same template-matching transition as a manual
//! selection; answers are mapped positionally onto the matched template's
//! question ids.

#[cfg(test)]
#[path = "examples_test.rs"]
mod examples_test;

use super::questions::SubSystemType;

/// A complete demo questionnaire fill, general answers plus the dynamic
/// answer list for the matched template.
#[derive(Clone, Copy, Debug)]
pub struct ExampleData {
    /// General answer map entries, keyed by general question id.
    pub general: &'static [(&'static str, &'static str)],
    pub sub_system_type: SubSystemType,
    /// Dynamic answers, positionally aligned with the template's questions.
    pub answers: &'static [&'static str],
}

/// Fixture keys in the order the demo buttons render.
pub const EXAMPLE_KEYS: [&str; 4] =
    ["internal-ai", "internal-cyber", "thirdparty-ai", "thirdparty-cyber"];

/// Look up a demo fixture by its button key.
pub fn example_data(key: &str) -> Option<&'static ExampleData> {
    match key {
        "internal-ai" => Some(&INTERNAL_AI),
        "internal-cyber" => Some(&INTERNAL_CYBER),
        "thirdparty-ai" => Some(&THIRDPARTY_AI),
        "thirdparty-cyber" => Some(&THIRDPARTY_CYBER),
        _ => None,
    }
}

static INTERNAL_AI: ExampleData = ExampleData {
    general: &[
        ("requestOwner", "Rohan Verma, India"),
        ("projectType", "internal"),
        ("projectName", "Factory Maintenance Predictor"),
        ("region", "India"),
        (
            "purpose",
            "To develop an in-house predictive maintenance model for our manufacturing equipment to reduce downtime and optimize repair schedules.",
        ),
        ("dateRange", "October 1, 2025 - March 31, 2026"),
        ("delayFactors", "Availability of historical sensor data and initial model training time."),
    ],
    sub_system_type: SubSystemType::AiSystem,
    answers: &[
        "Proprietary LSTM-based model developed internally.",
        "Licensed under internal corporate IP policy, available on our intranet.",
        "No",
        "Model architecture and data flow diagrams are available on our internal Confluence page.",
        "The model was fine-tuned on a 5-year dataset from our primary production line. Evaluation was done using Mean Absolute Error (MAE) and R-squared metrics.",
        "Data is not retained post-inference. Logs are kept for 72 hours for debugging.",
        "A formal risk analysis identified model drift as the primary risk. Mitigation includes continuous monitoring and a manual override system for maintenance alerts.",
        "Effectiveness testing showed a 25% reduction in unplanned downtime in a simulated environment.",
        "Pre-deployment testing included adversarial checks on sensor data inputs and bias analysis to ensure no specific machine type was unfairly penalized.",
        "We use SHAP (SHapley Additive exPlanations) values to explain each prediction, providing transparency to maintenance engineers.",
        "Model performance (MAE) is monitored in real-time on a Grafana dashboard. The model is recalibrated quarterly.",
        "Data is sourced directly from our own IoT sensors on the factory floor. They are trusted and calibrated regularly.",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
    ],
};

static INTERNAL_CYBER: ExampleData = ExampleData {
    general: &[
        ("requestOwner", "Anjali Sharma, India"),
        ("projectType", "internal"),
        ("projectName", "Internal SIEM Implementation"),
        ("region", "Global"),
        (
            "purpose",
            "To implement a new internal Security Information and Event Management (SIEM) system to enhance our threat detection and response capabilities.",
        ),
        ("dateRange", "September 15, 2025 - January 31, 2026"),
        ("delayFactors", "Integration with legacy systems and training of security operations staff."),
    ],
    sub_system_type: SubSystemType::Cybersecurity,
    answers: &[
        "Yes, we used the STRIDE threat modeling framework. Risks identified included data poisoning and unauthorized access, mitigated through strict access controls and log integrity checks.",
        "Sensitive data is encrypted at rest using AES-256 and in transit with TLS 1.3. Access is strictly controlled via our Privileged Access Management (PAM) system.",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Security incidents are detected via automated alerts, reported through our ITSM tool, and escalated according to a tiered response matrix.",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
    ],
};

static THIRDPARTY_AI: ExampleData = ExampleData {
    general: &[
        ("requestOwner", "Priya Singh, India"),
        ("projectType", "thirdparty"),
        ("projectName", "Third-Party Document Analyzer"),
        ("region", "India, United States, European Union"),
        (
            "purpose",
            "To automate document screening and risk analysis using a third-party artificial intelligence platform, aiming to improve operational efficiency and compliance.",
        ),
        ("dateRange", "September 1, 2025 - December 31, 2025"),
        (
            "delayFactors",
            "Integration complexity with our existing systems, potential delays from the data partner, and regulatory approval timelines.",
        ),
    ],
    sub_system_type: SubSystemType::ThirdPartyAi,
    answers: &[
        "We use advanced encryption for models at rest and in transit, coupled with strict access controls and regular vulnerability scanning.",
        "Yes, we have a 'human-in-the-loop' protocol that allows our compliance team to manually review and override any high-impact AI decisions before they are finalized.",
        "Yes",
        "Yes",
        "We provide comprehensive API documentation, detailed model cards, and interactive SHAP value visualizations to ensure transparency for all stakeholders.",
        "Yes",
        "We employ a multi-layered approach including data provenance checks, statistical anomaly detection, and adversarial sample detection to ensure data integrity.",
        "Yes",
        "We have a dedicated AI incident response plan with a 2-hour notification SLA for clients in case of any security or performance incident.",
        "We use fairness metrics like Equalized Odds and Demographic Parity, tested against benchmark datasets such as Aequitas, before any model is deployed in a high-risk domain.",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "All sensitive data is protected using AES-256 encryption at rest and TLS 1.3 in transit. We also apply k-anonymization techniques for analytics.",
        "Yes",
        "We utilize input sanitization libraries to block malicious code and content filters to validate that outputs are appropriate and on-topic.",
    ],
};

static THIRDPARTY_CYBER: ExampleData = ExampleData {
    general: &[
        ("requestOwner", "Vikram Reddy, India"),
        ("projectType", "thirdparty"),
        ("projectName", "Cloud Security (CASB) Project"),
        ("region", "North America, Europe"),
        (
            "purpose",
            "To integrate a third-party Cloud Access Security Broker (CASB) to secure our corporate cloud applications and enforce data loss prevention policies.",
        ),
        ("dateRange", "November 1, 2025 - February 28, 2026"),
        (
            "delayFactors",
            "Contract negotiations and complexity of policy migration from our old system.",
        ),
    ],
    sub_system_type: SubSystemType::ThirdPartyCyber,
    answers: &[
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "We perform annual security audits of all critical third-party partners; evidence can be provided upon request under NDA.",
        "Yes",
        "Yes",
        "Annually",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Quarterly",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
        "Yes",
    ],
};
