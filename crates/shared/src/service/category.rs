use crate::{
    abstract_trait::{
        CategoryServiceTrait, DynCategoryCommandRepository, DynCategoryQueryRepository,
    },
    domain::{
        requests::CreateCategoryRequest,
        responses::{ApiResponse, CategoryResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct CategoryService {
    query: DynCategoryQueryRepository,
    command: DynCategoryCommandRepository,
}

impl CategoryService {
    pub fn new(query: DynCategoryQueryRepository, command: DynCategoryCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError> {
        let categories = self.query.find_all().await.map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success(
            "Categories",
            categories.into_iter().map(CategoryResponse::from).collect(),
        ))
    }

    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = self
            .command
            .create_category(req)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success(
            "Category created",
            CategoryResponse::from(category),
        ))
    }
}
