use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AccessToken(pub Uuid);
