//! Prompt construction for report drafting and wording suggestions.
//!
//! The findings text arrives one organ per line in clinical order; the
//! system instruction tells the model how to treat the suggested-conclusion
//! line emitted by the builder.

use laudo_builder::SUGGESTED_CONCLUSION_MARKER;
use laudo_core::models::patient::PatientDetails;
use laudo_core::models::report::ExamType;

use crate::{DraftRequest, SuggestionRequest};

/// Characters of the current report sent as context with a suggestion.
pub const SUGGESTION_CONTEXT_CHARS: usize = 500;

const NOT_INFORMED: &str = "Não informado";
const NOT_INFORMED_F: &str = "Não informada";

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

fn sex(patient: &PatientDetails) -> &'static str {
    patient.sex.map(|s| s.label()).unwrap_or(NOT_INFORMED)
}

/// `ULTRASSONOGRAFIA DE ABDOMINAL TOTAL`.
pub fn report_title(exam_type: ExamType) -> String {
    format!(
        "ULTRASSONOGRAFIA DE {}",
        exam_type.label().to_uppercase().replace("2º", "SEGUNDO")
    )
}

/// Signature block with `%ultrassonografista`, `%crm` and `%rqe` placeholders
/// for the model to fill in. Registration lines are left out when blank.
fn signature_block(patient: &PatientDetails) -> String {
    let crm = if patient.crm.trim().is_empty() { "" } else { "CRM: %crm<br />" };
    let rqe = if patient.rqe.trim().is_empty() { "" } else { "RQE: %rqe" };
    format!(
        r#"<div class="signature" style="padding-top: 30px; text-align: right;">
        ___________________________<br />
        %ultrassonografista<br />
        {crm}
        {rqe}
    </div>"#
    )
}

pub fn draft_system_instruction(patient: &PatientDetails, exam_type: ExamType) -> String {
    let name = or_default(&patient.name, NOT_INFORMED);
    let exam_date = patient.exam_date;
    let sex = sex(patient);
    let age = or_default(&patient.age, NOT_INFORMED_F);
    let requester = or_default(&patient.requesting_physician, NOT_INFORMED);
    let title = report_title(exam_type);
    let signature = signature_block(patient);
    let marker = SUGGESTED_CONCLUSION_MARKER;

    format!(
        r#"Você é um assistente especialista em radiologia. Sua tarefa é pegar dados estruturados de um exame de ultrassonografia, juntamente com a história clínica do paciente, e transformá-los em um laudo médico profissional, em HTML, para ser exibido em um editor de texto rico.

**REGRAS DE FORMATAÇÃO:**
1. **SAÍDA HTML:** O laudo final deve ser um único bloco de HTML. Não inclua `<html>`, `<head>` ou `<body>`.
2. **PARÁGRAFOS:** Cada descrição de órgão (Fígado, Vesícula Biliar, etc.) deve ser um parágrafo HTML separado, envolvido em tags `<p> ... </p>`. Não use múltiplos `<br />` para criar espaços.
3. **CONCISÃO:** Mantenha o texto conciso para garantir que o laudo final caiba em uma única página A4.
4. **ESTRUTURA:** Siga a terminologia e formatação médica padrão em português do Brasil. O laudo deve ser completo, começando com os dados do paciente e terminando com a conclusão e o espaço para assinatura.
5. **ASSINATURA:** A seção da assinatura deve ser envolvida por `<div class="signature" style="padding-top: 30px;">...</div>` para garantir espaçamento e alinhamento à direita na impressão.
6. **CONCLUSÃO DINÂMICA:** A conclusão DEVE correlacionar os achados do exame com a história clínica fornecida. Se nos achados do exame houver uma linha começando com "{marker}", essa linha deve ser usada como base principal, mas ainda assim enriquecida com a correlação clínica. Se não houver "{marker}", formule uma conclusão que resuma os achados anormais à luz dos sintomas do paciente, sugerindo hipóteses diagnósticas. Para exames normais, se houver uma história clínica relevante, mencione a necessidade de correlação (ex: "Ausência de achados ecográficos que justifiquem a dor abdominal referida."). Se não houver história clínica, use a conclusão padrão ("Exame sem anormalidades detectáveis pelo método." para exames normais).

**MODELO DE ESTRUTURA E FORMATAÇÃO (use como guia):**

<div>
    Paciente: {name}<br />
    Data do exame: {exam_date} &nbsp;&nbsp;&nbsp;&nbsp; Sexo: {sex} &nbsp;&nbsp;&nbsp;&nbsp; Idade: {age}<br />
    Médico solicitante: {requester}
</div>

<p style="text-align: center;"><strong>{title}</strong></p>

<p>Fígado com dimensões normais, contornos regulares, bordas finas e ecotextura homogênea. Veia porta e veias hepáticas sem alterações.</p>
<p>Vesícula biliar com forma e dimensões normais, paredes finas e regulares, apresentando conteúdo anecogênico sem imagens calculosas.</p>
<p>Não há dilatação das vias biliares intra ou extra-hepáticas.</p>
<p>Pâncreas de dimensões normais, contornos regulares e ecotextura homogênea. Não há dilatação do ducto pancreático.</p>
<p>Baço com dimensões normais, contornos regulares e ecotextura homogênea.</p>
<p>Aorta e veia cava inferior com calibre e trajeto preservados.</p>
<p>Ausência de linfonodomegalias retroperitoneais detectáveis.</p>
<p>Rins tópicos com dimensões normais, contornos regulares e ecotextura habitual. Não há evidências de imagens calculosas calicinais. Não há dilatação do sistema coletor.</p>
<p>Bexiga com boa repleção, paredes finas e regulares, conteúdo anecogênico.</p>
<p>Ausência de líquido livre.</p>

<p><strong>CONCLUSÃO:</strong><br />Exame sem anormalidades detectáveis pelo método.</p>

{signature}"#
    )
}

pub fn draft_prompt(request: &DraftRequest) -> String {
    let patient = &request.patient;
    format!(
        r#"Por favor, gere um laudo médico completo em HTML para um exame de {exam}, baseado nas seguintes informações. Siga estritamente as regras de formatação e o modelo fornecido na instrução do sistema.

**Dados do Paciente para o Laudo:**
- Nome: {name}
- Idade: {age}
- Sexo: {sex}
- Médico Solicitante: {requester}
- Data do Exame: {exam_date}
- Ultrassonografista: {sonographer}
- CRM: {crm}
- RQE: {rqe}

**História Clínica Resumida:**
{history}

**Achados do Exame (use estes dados para construir o corpo do laudo, substituindo as seções normais do modelo se houver achados anormais):**
{findings}

Gere o laudo final, substituindo os placeholders (%ultrassonografista, %crm, %rqe) pelos dados fornecidos."#,
        exam = request.exam_type.label(),
        name = or_default(&patient.name, NOT_INFORMED),
        age = or_default(&patient.age, NOT_INFORMED_F),
        sex = sex(patient),
        requester = or_default(&patient.requesting_physician, NOT_INFORMED),
        exam_date = patient.exam_date,
        sonographer = or_default(&patient.sonographer, NOT_INFORMED),
        crm = patient.crm.trim(),
        rqe = patient.rqe.trim(),
        history = or_default(&patient.clinical_history, "Não informada."),
        findings = request.findings_text,
    )
}

pub const SUGGESTION_SYSTEM_INSTRUCTION: &str = "\
Você é um assistente especialista em radiologia. Sua tarefa é converter uma descrição em linguagem simples, fornecida por um médico, em uma terminologia médica técnica e precisa para um laudo de ultrassonografia.
- Analise a solicitação do usuário.
- Considere o sexo e a idade do paciente para fornecer uma sugestão mais precisa (por exemplo, se o paciente for mulher e a anotação for \"imagem ovalada ao lado da bexiga\", sugira algo relacionado aos ovários).
- Use o conteúdo do laudo atual para entender o contexto do exame.
- Se apropriado, sugira a necessidade de exames complementares (ex: USG transvaginal, Tomografia, etc.).
- A resposta deve ser apenas o texto médico sugerido, sem cabeçalhos, introduções ou qualquer formatação. Apenas o texto puro.";

pub fn suggestion_prompt(request: &SuggestionRequest) -> String {
    format!(
        r#"Por favor, converta a seguinte observação em linguagem médica apropriada.

**Observação do Médico:**
"{query}"

**Dados do Paciente:**
- Sexo: {sex}
- Idade: {age}

**Contexto do Laudo Atual (resumido):**
{context}...

Gere uma sugestão concisa e técnica."#,
        query = request.query.trim(),
        sex = sex(&request.patient),
        age = or_default(&request.patient.age, NOT_INFORMED_F),
        context = report_context(&request.current_report),
    )
}

/// First [`SUGGESTION_CONTEXT_CHARS`] characters of the report.
pub fn report_context(report: &str) -> &str {
    match report.char_indices().nth(SUGGESTION_CONTEXT_CHARS) {
        Some((end, _)) => &report[..end],
        None => report,
    }
}
