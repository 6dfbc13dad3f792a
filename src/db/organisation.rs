use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use entity::organisation::{Entity as Organisation, Model as OrganisationModel};
use entity::user::{Entity as User, Model as UserModel};
use entity::user_organisation::Entity as Membership;
use sea_orm::{ColumnTrait, EntityTrait, JoinType, ModelTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait};
use uuid::Uuid;

impl PostgresService {
    pub async fn is_member(&self, user_id: Uuid, organisation_id: Uuid) -> Result<bool, AppError> {
        Ok(Membership::find_by_id((user_id, organisation_id))
            .one(&self.database_connection)
            .await?
            .is_some())
    }

    pub async fn list_organisations_for_user(&self, user_id: Uuid) -> Result<Vec<OrganisationModel>, AppError> {
        Ok(Organisation::find()
            .join(JoinType::InnerJoin, entity::organisation::Relation::UserOrganisation.def())
            .filter(entity::user_organisation::Column::UserId.eq(user_id))
            .order_by_asc(entity::organisation::Column::Name)
            .all(&self.database_connection)
            .await?)
    }

    /// The organisation, if `user_id` is one of its members. Non-members get
    /// the same `NotFound` as a missing organisation.
    pub async fn get_organisation_for_member(&self, organisation_id: Uuid, user_id: Uuid) -> Result<OrganisationModel, AppError> {
        if !self.is_member(user_id, organisation_id).await? {
            return Err(AppError::NotFound("Organisation not found"));
        }
        Organisation::find_by_id(organisation_id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound("Organisation not found"))
    }

    /// Members of an organisation. No route exposes this yet; the
    /// integration tests use it to check registration's membership row.
    pub async fn list_organisation_members(&self, organisation_id: Uuid) -> Result<Vec<UserModel>, AppError> {
        let organisation = Organisation::find_by_id(organisation_id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound("Organisation not found"))?;
        Ok(organisation.find_related(User).all(&self.database_connection).await?)
    }
}
