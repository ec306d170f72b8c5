//! Built-in assessment templates, one per system type.
//!
//! These mirror the seed templates the backend ships with and serve as the
//! offline fixture for the questionnaire flow and its tests. The live
//! template list still comes from `/templates`; the builder page can add,
//! edit, and delete beyond this set.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use crate::net::types::{ResponseType, Template, TemplateQuestion, TemplateType};

fn question(index: usize, text: &str, response_type: ResponseType, required: bool) -> TemplateQuestion {
    TemplateQuestion {
        id: format!("{index}"),
        question: text.to_owned(),
        response_type,
        required,
        options: Vec::new(),
    }
}

fn build(
    id: &str,
    name: &str,
    description: &str,
    template_type: TemplateType,
    questions: &[(&str, ResponseType, bool)],
) -> Template {
    Template {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        template_type,
        questions: questions
            .iter()
            .enumerate()
            .map(|(i, (text, response_type, required))| {
                question(i + 1, text, *response_type, *required)
            })
            .collect(),
    }
}

/// The four built-in templates, in system-type order.
pub fn sample_templates() -> Vec<Template> {
    use ResponseType::{Boolean, Text};
    vec![
        build(
            "1",
            "AI Product Use-case Assessment",
            "Comprehensive assessment for AI product development including model safety, risk analysis, and monitoring",
            TemplateType::AiSystem,
            &[
                ("Which AI model(s) will be used?", Text, true),
                ("Link to, or copy of, the terms under which each of the AI model(s) used are licensed.", Text, true),
                ("Will the input data provided by our organization be used for training AI models?", Boolean, true),
                ("Any other documentation that you might have available providing information on the model and the intended uses.", Text, false),
                ("If applicable, how (if at all) the model has been trained (fine-tuned) or prompt tuned (prompt engineered), and how the training or tuning was evaluated.", Text, false),
                ("Time period data is retained in the model (in hours/days).", Text, true),
                ("Documented model safety and risk analysis based on potential for unintended uses.", Text, true),
                ("Documented pre-deployment effectiveness testing for the intended use cases identified above.", Text, true),
                ("Documented pre-deployment safety and risk testing for potential risks and harms associated with the model.", Text, true),
                ("Information on how the models provide transparency and explainability as part of the output. (This includes how the output was generated, and what material/data were used.)", Text, true),
                ("How the AI model is monitored on an ongoing basis for performance and accuracy.", Text, true),
                ("What are the data sources (data supply chain)? Are they trusted?", Text, true),
                ("Are there any controls/guardrails implemented to protect the AI system from prompt injection attacks (AI-specific attacks)?", Boolean, true),
                ("Do you have a penetration testing and/or vulnerability assessment process for the AI system?", Boolean, true),
                ("Are prompts and AI-generated content sanitized or validated?", Boolean, true),
                ("Are model, agent, or AI interactions monitored?", Boolean, true),
                ("Are there any AI incident response plans in place?", Boolean, true),
            ],
        ),
        build(
            "2",
            "Third-party AI Security Assessment",
            "Comprehensive security assessment for third-party AI systems",
            TemplateType::ThirdPartyAi,
            &[
                ("How do you safeguard deployed AI models against risks like model inversion, tampering, or theft?", Text, true),
                ("Are there established procedures to intervene manually in high-impact AI decisions, especially those involving personal or sensitive data?", Boolean, true),
                ("Do you have controls in place to ensure AI-generated outputs are accessible and understandable to external, non-technical stakeholders?", Boolean, true),
                ("Is your organization actively integrating AI-specific threat intelligence into its broader security monitoring framework?", Boolean, true),
                ("What strategies are used to ensure that your AI systems remain transparent and explainable to both technical and business teams?", Text, true),
                ("Do you implement version control and rollback mechanisms for your AI models to prevent unintentional changes or failures during updates?", Boolean, true),
                ("How do you verify the quality and trustworthiness of data inputs, and what measures are in place to detect adversarial or poisoned data?", Text, true),
                ("Are AI systems continuously observed for anomalies, biased behavior, or security-related events after deployment?", Boolean, true),
                ("Is a dedicated AI incident response plan in place, and how quickly are clients or partners informed in the event of an incident?", Text, true),
                ("What methods are used to test your models for bias prior to deployment, particularly in regulated or high-risk domains?", Text, true),
                ("Have you conducted formal bias audits, and do you maintain a remediation process for identified issues?", Boolean, true),
                ("Do you support deactivation or emergency shutdown mechanisms for your AI systems in case of critical system failures?", Boolean, true),
                ("Is role-based access control (RBAC) enforced across all teams interacting with AI infrastructure and data pipelines?", Boolean, true),
                ("Do you maintain detailed documentation that outlines the decision-making process of your AI models for audit or regulatory review?", Boolean, true),
                ("Are adversarial stress tests conducted to evaluate the robustness of your AI systems against malicious prompts or manipulation attempts?", Boolean, true),
                ("How are encryption, data masking, and anonymization applied to protect personal or regulated data in your AI workflows?", Text, true),
                ("Are deployed AI models isolated in secure environments to prevent unauthorized access or interference?", Boolean, true),
                ("What techniques do you use to validate or sanitize prompts and outputs to ensure safe and appropriate AI behavior?", Text, true),
            ],
        ),
        build(
            "3",
            "Third-party Security Assessment",
            "Comprehensive security assessment for third-party vendors and systems",
            TemplateType::ThirdPartyCyber,
            &[
                ("Does your org have a documented information security policy?", Boolean, true),
                ("Vendor security policy?", Boolean, true),
                ("For your current or proposed engagement with our org are there any dependencies on critical third party service providers?", Boolean, true),
                ("Do you have data protection policy or standard in place?", Boolean, true),
                ("Do you have risk management framework in place?", Boolean, true),
                ("Do you conduct security assessments of third parties? If so, provide evidence of your third party reviews.", Text, true),
                ("Will be third parties receiving our data?", Boolean, true),
                ("Do you conduct reviews of your security policies and procedure annually?", Boolean, true),
                ("How frequently update your risk management framework?", Text, true),
                ("Do you conduct and require annual security awareness training for all contracts and employees?", Boolean, true),
                ("Do you maintain an inventory of all assets, regualry review and update?", Boolean, true),
                ("Do you have process for classifying and handling assets?", Boolean, true),
                ("Do you have procedure of secure disposal?", Boolean, true),
                ("Are all endpoints that connect directly to production networks centrally managed?", Boolean, true),
                ("Does both standard and employee issued device security configuration/feature and required BYOD configs?", Boolean, true),
                ("Do you have IAM system?", Boolean, true),
                ("Do you have PAM?", Boolean, true),
                ("Do you enforce MFA?", Boolean, true),
                ("What is the frequency of your access reviews?", Text, true),
                ("Do you have process to manage third party access?", Boolean, true),
                ("Does your org apply deny-by-exception policy to prevent the use of unauthorized software?", Boolean, true),
                ("Do you have SIEM in place?", Boolean, true),
                ("Do you have incident response?", Boolean, true),
                ("Do you conduct regular vulernabilty scans?", Boolean, true),
                ("Do you have threat intelligence in palce?", Boolean, true),
                ("Do you have process for handling zero-day attacks?", Boolean, true),
            ],
        ),
        build(
            "4",
            "Cybersecurity Management Assessment",
            "Comprehensive cybersecurity management assessment covering threat modeling, data protection, and security controls",
            TemplateType::Cybersecurity,
            &[
                ("Have you performed threat modeling for the system? What risks were identified and how were they mitigated?", Text, true),
                ("How is sensitive data (e.g., PII, credentials, financial data) stored and protected at rest and in transit?", Text, true),
                ("Are input validation and output encoding implemented to prevent injection attacks (e.g., SQLi, XSS)?", Boolean, true),
                ("Is file upload functionality (if any) protected against malware, file type spoofing, and excessive size uploads?", Boolean, true),
                ("Are cryptographic functions (e.g., hashing, encryption) implemented using industry-standard libraries and algorithms?", Boolean, true),
                ("Are secrets (e.g., API keys, DB passwords) stored securely (e.g., not hard-coded or in source control)?", Boolean, true),
                ("Is authentication implemented using secure protocols (e.g., OAuth2, SAML, OpenID Connect)?", Boolean, true),
                ("Are password policies enforced (e.g., length, complexity, expiration)?", Boolean, true),
                ("Are multi-factor authentication (MFA) mechanisms in place for privileged access?", Boolean, true),
                ("Is role-based access control (RBAC) or attribute-based access control (ABAC) implemented?", Boolean, true),
                ("Are authorization checks enforced both at the API and UI layers?", Boolean, true),
                ("Is the application hosted on a secure and patched operating system or container?", Boolean, true),
                ("Are network communications secured using TLS/SSL?", Boolean, true),
                ("Are unused ports and services disabled on all production environments?", Boolean, true),
                ("Is the CI/CD pipeline configured to perform security scans (e.g., SAST, DAST, dependency scans)?", Boolean, true),
                ("Are container images (if used) scanned for vulnerabilities before deployment?", Boolean, true),
                ("Are access logs, error logs, and security logs generated and stored securely?", Boolean, true),
                ("Is logging implemented in a way that avoids storing sensitive data in plaintext?", Boolean, true),
                ("Are log files monitored for unusual or unauthorized activity?", Boolean, true),
                ("Is user and admin activity auditable and traceable?", Boolean, true),
                ("Is there an incident response plan in place specific to this application or service?", Boolean, true),
                ("How are security incidents detected, reported, and escalated?", Text, true),
                ("Are backups taken regularly and tested for restoration?", Boolean, true),
                ("Are disaster recovery and business continuity plans documented and tested?", Boolean, true),
                ("Are developers trained in secure coding practices?", Boolean, true),
                ("Is code reviewed manually and/or using automated static analysis tools?", Boolean, true),
                ("Are dependencies regularly checked and updated to patch known vulnerabilities?", Boolean, true),
                ("Are security requirements incorporated into each stage of the SDLC (requirements, design, implementation, testing)?", Boolean, true),
                ("Is the system compliant with relevant security standards or regulations (e.g., ISO 27001, GDPR, HIPAA)?", Boolean, true),
                ("Are data retention and deletion policies clearly defined and enforced?", Boolean, true),
            ],
        ),
    ]
}
