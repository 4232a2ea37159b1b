use uuid::Uuid;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Fields supplied by `addClient`; the id is generated by the store.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewClient {
    pub fn into_client(self, id: Uuid) -> Client {
        Client {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}
