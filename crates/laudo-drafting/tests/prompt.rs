use jiff::civil::date;
use laudo_core::models::patient::{PatientDetails, Sex};
use laudo_core::models::report::ExamType;
use laudo_drafting::prompt::{
    SUGGESTION_CONTEXT_CHARS, draft_prompt, draft_system_instruction, report_context, report_title,
    suggestion_prompt,
};
use laudo_drafting::{DraftRequest, SuggestionRequest};

fn blank_patient() -> PatientDetails {
    PatientDetails::new(date(2025, 3, 1))
}

fn filled_patient() -> PatientDetails {
    let mut patient = blank_patient();
    patient.name = "Maria Souza".into();
    patient.sex = Some(Sex::Female);
    patient.age = "54 anos".into();
    patient.requesting_physician = "Dra. Ana Reis".into();
    patient.sonographer = "Dr. Paulo Lima".into();
    patient.crm = "12345".into();
    patient.clinical_history = "Dor em hipocôndrio direito.".into();
    patient
}

#[test]
fn title_is_uppercased() {
    assert_eq!(report_title(ExamType::AbdominalTotal), "ULTRASSONOGRAFIA DE ABDOMINAL TOTAL");
}

#[test]
fn system_instruction_uses_defaults_for_missing_fields() {
    let system = draft_system_instruction(&blank_patient(), ExamType::AbdominalTotal);
    assert!(system.contains("Paciente: Não informado<br />"));
    assert!(system.contains("Data do exame: 2025-03-01"));
    assert!(system.contains("Sexo: Não informado"));
    assert!(system.contains("Idade: Não informada"));
    assert!(system.contains("Médico solicitante: Não informado"));
    assert!(system.contains("<strong>ULTRASSONOGRAFIA DE ABDOMINAL TOTAL</strong>"));
    assert!(system.contains("%ultrassonografista<br />"));
    assert!(!system.contains("%crm"));
    assert!(!system.contains("%rqe"));
}

#[test]
fn system_instruction_mentions_the_conclusion_marker() {
    let system = draft_system_instruction(&filled_patient(), ExamType::AbdominalTotal);
    assert!(system.contains("começando com \"CONCLUSÃO SUGESTIVA:\""));
    assert!(system.contains("Paciente: Maria Souza<br />"));
    assert!(system.contains("Sexo: Feminino"));
    assert!(system.contains("CRM: %crm<br />"));
    assert!(!system.contains("RQE: %rqe"));
}

#[test]
fn draft_prompt_carries_findings_and_history() {
    let request = DraftRequest {
        findings_text: "Fígado: com dimensões normais.\nBaço: ausente (status pós-esplenectomia)."
            .into(),
        patient: filled_patient(),
        exam_type: ExamType::AbdominalTotal,
    };
    let prompt = draft_prompt(&request);
    assert!(prompt.contains("para um exame de Abdominal Total"));
    assert!(prompt.contains("- Ultrassonografista: Dr. Paulo Lima"));
    assert!(prompt.contains("- CRM: 12345"));
    assert!(prompt.contains("**História Clínica Resumida:**\nDor em hipocôndrio direito."));
    assert!(prompt.contains(&request.findings_text));
}

#[test]
fn draft_prompt_without_history() {
    let request = DraftRequest {
        findings_text: String::new(),
        patient: blank_patient(),
        exam_type: ExamType::AbdominalTotal,
    };
    assert!(draft_prompt(&request).contains("**História Clínica Resumida:**\nNão informada."));
}

#[test]
fn suggestion_context_is_truncated() {
    let report = "á".repeat(SUGGESTION_CONTEXT_CHARS + 50);
    let context = report_context(&report);
    assert_eq!(context.chars().count(), SUGGESTION_CONTEXT_CHARS);
    assert_eq!(report_context("curto"), "curto");

    let request = SuggestionRequest {
        query: " imagem ovalada ao lado da bexiga ".into(),
        current_report: report.clone(),
        patient: filled_patient(),
    };
    let prompt = suggestion_prompt(&request);
    assert!(prompt.contains("\"imagem ovalada ao lado da bexiga\""));
    assert!(prompt.contains("- Sexo: Feminino\n- Idade: 54 anos"));
    assert!(prompt.contains(&format!("{context}...")));
    assert!(!prompt.contains(&report));
}
