use crate::db::postgres_service::PostgresService;
use crate::{
    types::{error::AppError, organisation::default_organisation_name, user::DBUserCreate},
    utils::token,
};
use chrono::Utc;
use entity::organisation::{ActiveModel as OrganisationActive, Model as OrganisationModel};
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use entity::user_organisation::{ActiveModel as MembershipActive, Entity as Membership};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
    Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Strict lookup for callers that expect the user to exist. Login uses
    /// `find_user_by_email` instead; this one backs the integration tests.
    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(self
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    /// Signup: user, default organisation and membership in one transaction.
    /// A duplicate email, including one that loses a concurrent race, is
    /// `AppError::AlreadyExists`.
    pub async fn register_user(&self, payload: DBUserCreate) -> Result<(UserModel, OrganisationModel), AppError> {
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let user = UserActive {
            id: Set(token::new_id()),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            email: Set(payload.email),
            password: Set(payload.password_hash),
            phone: Set(payload.phone),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyExists,
            _ => AppError::from(e),
        })?;

        let organisation = OrganisationActive {
            id: Set(token::new_id()),
            name: Set(default_organisation_name(&user.first_name)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        Membership::insert(MembershipActive {
            user_id: Set(user.id),
            organisation_id: Set(organisation.id),
            created_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok((user, organisation))
    }

    /// True if both users belong to at least one common organisation.
    pub async fn users_share_organisation(&self, a: Uuid, b: Uuid) -> Result<bool, AppError> {
        let orgs_of_a: Vec<Uuid> = Membership::find()
            .select_only()
            .column(entity::user_organisation::Column::OrganisationId)
            .filter(entity::user_organisation::Column::UserId.eq(a))
            .into_tuple()
            .all(&self.database_connection)
            .await?;

        if orgs_of_a.is_empty() {
            return Ok(false);
        }

        Ok(Membership::find()
            .filter(entity::user_organisation::Column::UserId.eq(b))
            .filter(entity::user_organisation::Column::OrganisationId.is_in(orgs_of_a))
            .count(&self.database_connection)
            .await?
            > 0)
    }
}
