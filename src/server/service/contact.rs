use sea_orm::DatabaseConnection;

use crate::server::{
    data::contact::ContactRepository,
    error::AppError,
    model::{
        contact::{Contact, ContactParams},
        pagination::{PageRequest, Paginated},
    },
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, request: PageRequest) -> Result<Paginated<Contact>, AppError> {
        let (contacts, total) = ContactRepository::new(self.db)
            .get_paginated(request)
            .await?;

        Ok(Paginated::new(contacts, total, request))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Contact, AppError> {
        ContactRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
    }

    pub async fn create(&self, params: ContactParams) -> Result<Contact, AppError> {
        Ok(ContactRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: ContactParams) -> Result<Contact, AppError> {
        ContactRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ContactRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Contact not found".to_string()));
        }

        Ok(())
    }
}
