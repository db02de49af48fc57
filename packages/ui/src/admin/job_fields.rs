//! Form fields shared by the post-job and edit-job pages.

use admin_core::{CTC_BANDS, EMPLOYMENT_TYPES, JobPost, JobStatus, WORK_MODES, end_date_input};
use dioxus::prelude::*;

use super::{LocationInput, RichTextEditor};

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Props for JobFields component.
#[derive(Props, Clone, PartialEq)]
pub struct JobFieldsProps {
    /// The posting being edited in place.
    pub job: Signal<JobPost>,
    /// Lock the company fields and show the status select.
    #[props(default = false)]
    pub editing: bool,
}

/// Every editable field of a job posting.
#[component]
pub fn JobFields(props: JobFieldsProps) -> Element {
    let mut job = props.job;
    let editing = props.editing;
    let current = job();
    let experience = current.experience_required.map(|n| n.to_string()).unwrap_or_default();
    let referrals = current.no_of_referrals.map(|n| n.to_string()).unwrap_or_default();
    let end_date = end_date_input(&current.end_date).to_string();

    rsx! {
        div { class: "form-grid",
            div { class: "form-group",
                label { class: "form-label", "Job Role" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{current.job_role}",
                    oninput: move |evt| job.write().job_role = evt.value(),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Company Name" }
                input {
                    class: "form-input",
                    r#type: "text",
                    disabled: editing,
                    value: "{current.company_name}",
                    oninput: move |evt| job.write().company_name = evt.value(),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Company Logo URL" }
                input {
                    class: "form-input",
                    r#type: "url",
                    disabled: editing,
                    value: "{current.company_logo_url}",
                    oninput: move |evt| job.write().company_logo_url = evt.value(),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Job Unique ID" }
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{current.job_unique_id}",
                    oninput: move |evt| job.write().job_unique_id = evt.value(),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Location" }
                LocationInput {
                    value: current.location.clone(),
                    on_change: move |value| job.write().location = value,
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Employment Type" }
                select {
                    class: "form-select",
                    value: "{current.employment_type}",
                    onchange: move |evt| job.write().employment_type = evt.value(),
                    for (value, label) in EMPLOYMENT_TYPES.iter().copied() {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", "CTC" }
                select {
                    class: "form-select",
                    value: "{current.ctc}",
                    onchange: move |evt| job.write().ctc = evt.value(),
                    option { value: "", "Select CTC" }
                    for band in CTC_BANDS.iter().copied() {
                        option { key: "{band}", value: "{band}", "{band}" }
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Experience Required (years)" }
                input {
                    class: "form-input",
                    r#type: "number",
                    min: "0",
                    value: "{experience}",
                    oninput: move |evt| job.write().experience_required = parse_count(&evt.value()),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Work Mode" }
                select {
                    class: "form-select",
                    value: "{current.work_mode}",
                    onchange: move |evt| job.write().work_mode = evt.value(),
                    for (value, label) in WORK_MODES.iter().copied() {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", "No. of Referrals" }
                input {
                    class: "form-input",
                    r#type: "number",
                    min: "1",
                    value: "{referrals}",
                    oninput: move |evt| job.write().no_of_referrals = parse_count(&evt.value()),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "End Date" }
                input {
                    class: "form-input",
                    r#type: "date",
                    value: "{end_date}",
                    oninput: move |evt| job.write().end_date = evt.value(),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "Job Link" }
                input {
                    class: "form-input",
                    r#type: "url",
                    value: "{current.job_link}",
                    oninput: move |evt| job.write().job_link = evt.value(),
                }
            }
            if editing {
                div { class: "form-group",
                    label { class: "form-label", "Status" }
                    select {
                        class: "form-select",
                        value: "{current.status}",
                        onchange: move |evt| job.write().status = JobStatus::parse(&evt.value()),
                        for status in JobStatus::ALL {
                            option { key: "{status}", value: "{status}", "{status}" }
                        }
                        if !JobStatus::ALL.contains(&current.status) {
                            option { value: "{current.status}", "{current.status}" }
                        }
                    }
                }
            }
        }
        div { class: "form-group form-group-wide",
            label { class: "form-label", "Job Description" }
            RichTextEditor {
                value: current.job_description.clone(),
                on_change: move |html| job.write().job_description = html,
            }
        }
    }
}
