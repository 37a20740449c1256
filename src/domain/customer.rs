use std::{
    fmt,
    hash::{Hash, Hasher},
};

use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};

use super::{combine_hash_codes, HashCode};

/// 顧客ID
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct CustomerId(i32);

impl HashCode for CustomerId {
    fn hash_code(&self) -> i32 {
        self.0.hash_code()
    }
}

/// 顧客
///
/// IDは生成後に変更できない。名前とメールアドレスは常に存在する。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: String, email: String) -> Self {
        Self { id, name, email }
    }

    /// 必須項目が揃っているか検証しながら顧客を組み立てる
    pub fn builder(id: CustomerId) -> CustomerBuilder {
        CustomerBuilder::new(id)
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// 指定された項目だけを置き換えた複製を返す
    pub fn copy(&self, overrides: CustomerOverrides) -> Self {
        let CustomerOverrides { id, name, email } = overrides;
        Self {
            id: id.unwrap_or(self.id),
            name: name.unwrap_or_else(|| self.name.clone()),
            email: email.unwrap_or_else(|| self.email.clone()),
        }
    }

    pub fn into_parts(self) -> (CustomerId, String, String) {
        (self.id, self.name, self.email)
    }
}

impl HashCode for Customer {
    fn hash_code(&self) -> i32 {
        combine_hash_codes([
            self.id.hash_code(),
            self.name.hash_code(),
            self.email.hash_code(),
        ])
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.email == other.email
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Customer(id={}, name={}, email={})",
            self.id, self.name, self.email
        )
    }
}

/// 複製時に置き換える項目
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerOverrides {
    pub id: Option<CustomerId>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CustomerOverrides {
    pub fn id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }
}

#[derive(Clone, Debug)]
pub struct CustomerBuilder {
    id: CustomerId,
    name: Option<String>,
    email: Option<String>,
}

impl CustomerBuilder {
    pub fn new(id: CustomerId) -> Self {
        Self {
            id,
            name: None,
            email: None,
        }
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    pub fn build(self) -> Result<Customer, CustomerError> {
        let name = self
            .name
            .ok_or(CustomerError::MissingArgument { argument: "name" })?;
        let email = self
            .email
            .ok_or(CustomerError::MissingArgument { argument: "email" })?;
        Ok(Customer::new(self.id, name, email))
    }
}

/// 顧客エラー
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum CustomerError {
    /// 必須の引数がありません
    #[display(fmt = "Argument `{}` must not be absent", argument)]
    MissingArgument { argument: &'static str },
}
