//! Product Repository

use super::entity::{Product, ProductStatus};
use crate::shared::error::Result;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

/// Sort orders for the public listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    Latest,
    Trending,
    Rating,
}

/// Filters for the public listing
#[derive(Debug, Default)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub featured: bool,
}

pub struct ProductRepository {
    collection: Collection<Product>,
}

impl ProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("products"),
        }
    }

    pub async fn insert(&self, product: &Product) -> Result<()> {
        self.collection.insert_one(product).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        Ok(self.collection.find_one(doc! { "slug": slug }).await?)
    }

    pub async fn exists_by_slug(&self, slug: &str) -> Result<bool> {
        let count = self.collection.count_documents(doc! { "slug": slug }).await?;
        Ok(count > 0)
    }

    pub async fn exists_by_title(&self, title: &str) -> Result<bool> {
        let count = self
            .collection
            .count_documents(doc! { "title": title })
            .await?;
        Ok(count > 0)
    }

    /// Published products with optional filters, in the requested order
    pub async fn find_published(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
    ) -> Result<Vec<Product>> {
        let mut query = doc! { "status": "published" };

        if let Some(search) = &filter.search {
            query.insert(
                "title",
                doc! { "$regex": regex::escape(search), "$options": "i" },
            );
        }
        if let Some(category) = &filter.category {
            query.insert("category", category);
        }
        if let Some(tag) = &filter.tag {
            query.insert("tags", tag);
        }
        if filter.featured {
            query.insert("featured", true);
        }

        let sort_doc = match sort {
            ProductSort::Latest => doc! { "createdAt": -1 },
            ProductSort::Trending => doc! { "trendingScore": -1 },
            ProductSort::Rating => doc! { "avgRating": -1 },
        };

        let cursor = self.collection.find(query).sort(sort_doc).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Top published products by trending score
    pub async fn find_trending(&self, limit: i64) -> Result<Vec<Product>> {
        let cursor = self
            .collection
            .find(doc! { "status": "published" })
            .sort(doc! { "trendingScore": -1 })
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn update(&self, product: &Product) -> Result<()> {
        self.collection
            .replace_one(doc! { "_id": &product.id }, product)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    /// View event: views +1, trending +2
    pub async fn record_view(&self, id: &str) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$inc": { "views": 1, "trendingScore": 2 } },
            )
            .await?;
        Ok(())
    }

    /// Outbound click event: clicks +1, trending +3
    pub async fn record_click(&self, id: &str) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$inc": { "clicks": 1, "trendingScore": 3 } },
            )
            .await?;
        Ok(())
    }

    pub async fn set_votes(&self, id: &str, votes: i64) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "votes": votes } })
            .await?;
        Ok(())
    }

    pub async fn set_avg_rating(&self, id: &str, avg_rating: f64) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "avgRating": avg_rating } },
            )
            .await?;
        Ok(())
    }

    pub async fn push_plan(&self, id: &str, plan_id: &str) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$push": { "plans": plan_id } })
            .await?;
        Ok(())
    }

    pub async fn pull_plan(&self, id: &str, plan_id: &str) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$pull": { "plans": plan_id } })
            .await?;
        Ok(())
    }

    pub async fn exists(&self, id: &str) -> Result<bool> {
        let count = self.collection.count_documents(doc! { "_id": id }).await?;
        Ok(count > 0)
    }
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Published => "published",
            ProductStatus::Pending => "pending",
        }
    }
}
