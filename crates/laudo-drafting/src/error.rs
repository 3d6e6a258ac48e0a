use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftingError {
    #[error("erro de comunicação com o serviço de IA")]
    Communication(#[source] Box<ureq::Error>),

    #[error("erro de comunicação com o serviço de IA: resposta inválida ({0})")]
    ResponseParse(String),

    #[error("erro de comunicação com o serviço de IA: resposta vazia")]
    EmptyResponse,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("drafting service not configured: {0}")]
    Config(String),
}

impl From<ureq::Error> for DraftingError {
    fn from(err: ureq::Error) -> Self {
        Self::Communication(Box::new(err))
    }
}
