use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    #[default]
    Employee,
}

/// 不分大小寫; manager 以外的值都當 employee
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let role = String::deserialize(deserializer)?;

        if role.eq_ignore_ascii_case("manager") {
            return Ok(Role::Manager);
        }
        if !role.eq_ignore_ascii_case("employee") {
            tracing::debug!("unknown role `{}` in token, treating as employee", role);
        }
        Ok(Role::Employee)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// middleware 驗證 token 後放進 request extensions 的使用者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub name: Option<String>,
    pub role: Role,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        CurrentUser {
            name: claims.name.filter(|name| !name.trim().is_empty()),
            role: claims.role,
        }
    }
}

impl CurrentUser {
    pub fn identity(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
