//! Storage of review instances.
//!
//! [`ReviewStore`] is the seam the review workflow depends on. [`ReviewRepository`] is
//! the SeaORM implementation; every status change it performs is one conditional
//! `UPDATE ... WHERE status IN (...)` and every insert is one
//! `INSERT ... SELECT ... WHERE NOT EXISTS (open instance)`, so concurrent submissions,
//! claims and decisions resolve in the database rather than in the application.

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use sea_orm::{
    sea_query::{ConditionalStatement, Expr, Query},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr, TransactionTrait,
};

use crate::{
    model::review::ReviewCategory,
    server::{
        data::punishment::release_punishment,
        error::review::ReviewError,
        model::review::{NewReviewInstance, ReviewInstance, ReviewStatus, Transition},
    },
};

/// Persistence operations required by the review workflow.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Gets instance `id` if it belongs to `category`.
    async fn get_instance(
        &self,
        category: ReviewCategory,
        id: i32,
    ) -> Result<Option<ReviewInstance>, ReviewError>;

    /// Inserts a new instance in the pending state.
    ///
    /// The open-instance check and the insert are one atomic step, so at most one
    /// pending or in-review instance exists per subject and category.
    ///
    /// # Returns
    /// - `Ok(ReviewInstance)` - The stored pending instance
    /// - `Err(ReviewError::DuplicatePending)` - Subject already has an open instance in
    ///   the payload's category
    /// - `Err(ReviewError::Storage)` - Database error
    async fn insert(&self, instance: NewReviewInstance) -> Result<ReviewInstance, ReviewError>;

    /// Applies `transition` only if the instance's current status is one of `expected`.
    ///
    /// The check and the write are a single atomic step. A `Transition::Decide` carrying
    /// `release_punishment` also releases that punishment atomically with the status
    /// write; if the release fails nothing is written.
    ///
    /// # Returns
    /// - `Ok(true)` - Transition applied
    /// - `Ok(false)` - Instance missing, in another category, or not in an expected status
    /// - `Err(ReviewError::Storage)` - Write failed and was rolled back
    async fn compare_and_set_status(
        &self,
        category: ReviewCategory,
        id: i32,
        expected: &[ReviewStatus],
        transition: &Transition,
    ) -> Result<bool, ReviewError>;

    /// Most recently decided instance of `subject` in `category`.
    async fn get_last_decided(
        &self,
        category: ReviewCategory,
        subject: &str,
    ) -> Result<Option<ReviewInstance>, ReviewError>;

    /// Instances of `category` in any of `statuses`, newest first.
    async fn list_by_status(
        &self,
        category: ReviewCategory,
        statuses: &[ReviewStatus],
    ) -> Result<Vec<ReviewInstance>, ReviewError>;

    /// Every instance `subject` submitted in `category`, newest first.
    async fn list_for_subject(
        &self,
        category: ReviewCategory,
        subject: &str,
    ) -> Result<Vec<ReviewInstance>, ReviewError>;
}

/// SeaORM-backed [`ReviewStore`].
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    /// Creates a new ReviewRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

fn labels(category: ReviewCategory, statuses: &[ReviewStatus]) -> Vec<&'static str> {
    statuses.iter().map(|status| status.label(category)).collect()
}

fn decode(entities: Vec<entity::review::Model>) -> Result<Vec<ReviewInstance>, ReviewError> {
    entities
        .into_iter()
        .map(|entity| ReviewInstance::from_entity(entity).map_err(ReviewError::from))
        .collect()
}

#[async_trait]
impl<'a> ReviewStore for ReviewRepository<'a> {
    async fn get_instance(
        &self,
        category: ReviewCategory,
        id: i32,
    ) -> Result<Option<ReviewInstance>, ReviewError> {
        let entity = entity::prelude::Review::find_by_id(id)
            .filter(entity::review::Column::Category.eq(category.as_str()))
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(ReviewInstance::from_entity(entity)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, instance: NewReviewInstance) -> Result<ReviewInstance, ReviewError> {
        let category = instance.payload.category();
        let subject = instance.subject;

        let open = Query::select()
            .expr(Expr::value(1))
            .from(entity::prelude::Review)
            .and_where(entity::review::Column::Category.eq(category.as_str()))
            .and_where(entity::review::Column::Subject.eq(subject.as_str()))
            .and_where(
                entity::review::Column::Status.is_in(labels(category, &ReviewStatus::OPEN)),
            )
            .to_owned();

        let row = Query::select()
            .exprs([
                Expr::value(category.as_str()),
                Expr::value(subject.as_str()),
                Expr::value(ReviewStatus::Pending.label(category)),
                Expr::value(instance.payload.to_json()?),
                Expr::value(instance.payload.punishment_id()),
                Expr::value(instance.created_at),
            ])
            .and_where(Expr::not_exists(open))
            .to_owned();

        let insert = Query::insert()
            .into_table(entity::prelude::Review)
            .columns([
                entity::review::Column::Category,
                entity::review::Column::Subject,
                entity::review::Column::Status,
                entity::review::Column::Payload,
                entity::review::Column::PunishmentId,
                entity::review::Column::CreatedAt,
            ])
            .select_from(row)
            .map_err(|err| DbErr::Custom(err.to_string()))?
            .to_owned();

        let duplicate = || ReviewError::DuplicatePending {
            category,
            subject: subject.clone(),
        };

        let result = match self.db.execute(&insert).await {
            Ok(result) => result,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(duplicate());
            }
            Err(err) => return Err(err.into()),
        };

        if result.rows_affected() == 0 {
            return Err(duplicate());
        }

        let id = result.last_insert_id() as i32;
        self.get_instance(category, id)
            .await?
            .ok_or(ReviewError::NotFound { category, id })
    }

    async fn compare_and_set_status(
        &self,
        category: ReviewCategory,
        id: i32,
        expected: &[ReviewStatus],
        transition: &Transition,
    ) -> Result<bool, ReviewError> {
        let target = transition.target().label(category);
        let update = entity::prelude::Review::update_many()
            .filter(entity::review::Column::Id.eq(id))
            .filter(entity::review::Column::Category.eq(category.as_str()))
            .filter(entity::review::Column::Status.is_in(labels(category, expected)))
            .col_expr(entity::review::Column::Status, Expr::value(target));

        match transition {
            Transition::Claim { actor } => {
                let result = update
                    .col_expr(entity::review::Column::ClaimedBy, Expr::value(actor.clone()))
                    .exec(self.db)
                    .await?;

                Ok(result.rows_affected == 1)
            }
            Transition::Decide {
                actor,
                response,
                at,
                release_punishment: punishment_id,
                ..
            } => {
                let txn = self.db.begin().await?;

                let result = update
                    .col_expr(
                        entity::review::Column::ClaimedBy,
                        Expr::value(Option::<String>::None),
                    )
                    .col_expr(entity::review::Column::HandledBy, Expr::value(actor.clone()))
                    .col_expr(entity::review::Column::Response, Expr::value(response.clone()))
                    .col_expr(entity::review::Column::HandledAt, Expr::value(*at))
                    .exec(&txn)
                    .await?;

                if result.rows_affected == 0 {
                    txn.rollback().await?;
                    return Ok(false);
                }

                if let Some(punishment_id) = punishment_id {
                    if let Err(err) = release_punishment(&txn, *punishment_id).await {
                        tracing::warn!(
                            "Rolling back decision on {} {}: failed to release punishment {}: {}",
                            category,
                            id,
                            punishment_id,
                            err
                        );
                        txn.rollback().await?;
                        return Err(err.into());
                    }
                }

                txn.commit().await?;

                Ok(true)
            }
        }
    }

    async fn get_last_decided(
        &self,
        category: ReviewCategory,
        subject: &str,
    ) -> Result<Option<ReviewInstance>, ReviewError> {
        let entity = entity::prelude::Review::find()
            .filter(entity::review::Column::Category.eq(category.as_str()))
            .filter(entity::review::Column::Subject.eq(subject))
            .filter(entity::review::Column::Status.is_in(labels(
                category,
                &[ReviewStatus::Approved, ReviewStatus::Denied],
            )))
            .order_by_desc(entity::review::Column::HandledAt)
            .order_by_desc(entity::review::Column::Id)
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(ReviewInstance::from_entity(entity)?)),
            None => Ok(None),
        }
    }

    async fn list_by_status(
        &self,
        category: ReviewCategory,
        statuses: &[ReviewStatus],
    ) -> Result<Vec<ReviewInstance>, ReviewError> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::Category.eq(category.as_str()))
            .filter(entity::review::Column::Status.is_in(labels(category, statuses)))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        decode(entities)
    }

    async fn list_for_subject(
        &self,
        category: ReviewCategory,
        subject: &str,
    ) -> Result<Vec<ReviewInstance>, ReviewError> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::Category.eq(category.as_str()))
            .filter(entity::review::Column::Subject.eq(subject))
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        decode(entities)
    }
}
