//! Knowledge-base operations on top of the GraphQL executor.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::config::ServerConfig;
use crate::delta;
use crate::error::{Result, SlabError};
use crate::graphql::GraphQlClient;
use crate::post::{self, Post, PostPage};

/// Results returned by `search_posts` when the caller gives no limit.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

const POST_FIELDS: &str = "id title content insertedAt updatedAt owner { id name email }";

fn get_post_query() -> String {
    format!("query GetPost($id: ID!) {{ post(id: $id) {{ {POST_FIELDS} }} }}")
}

const CURRENT_CONTENT_QUERY: &str = "query PostContent($id: ID!) { post(id: $id) { id content } }";

fn update_content_mutation() -> String {
    format!(
        "mutation UpdatePostContent($id: ID!, $delta: Json!) {{ \
         updatePostContent(id: $id, delta: $delta) {{ {POST_FIELDS} }} }}"
    )
}

fn search_query() -> String {
    format!(
        "query SearchPosts($query: String!, $first: Int) {{ \
         search(query: $query, first: $first, types: [POST]) {{ \
         edges {{ node {{ ... on PostSearchResult {{ post {{ {POST_FIELDS} }} }} }} }} }} }}"
    )
}

fn topic_posts_query() -> String {
    format!("query TopicPosts($id: ID!) {{ topic(id: $id) {{ posts {{ {POST_FIELDS} }} }} }}")
}

fn organization_posts_query() -> String {
    format!("query OrganizationPosts {{ organization {{ posts {{ {POST_FIELDS} }} }} }}")
}

/// Operations exposed to the tool façade.
///
/// Implementations are stateless between calls; [`SlabClient`] is the
/// production one.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    async fn get_post(&self, id: &str) -> Result<Post>;

    /// Replace the full content of a post with `content`.
    ///
    /// Reads the current content, then writes a replacement edit. The two
    /// requests are not atomic: the service offers no compare-and-swap, so a
    /// concurrent edit between them is overwritten, and a failed write leaves
    /// the post unchanged.
    async fn update_post(&self, id: &str, content: &str) -> Result<Post>;

    async fn search_posts(&self, query: &str, limit: Option<u32>) -> Result<PostPage>;

    /// List posts in a topic, or across the organization when `topic_id` is
    /// `None`.
    async fn list_posts(&self, topic_id: Option<&str>) -> Result<PostPage>;
}

#[derive(Debug, Deserialize)]
struct PostData {
    post: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct UpdateData {
    #[serde(rename = "updatePostContent")]
    update_post_content: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: Option<SearchConnection>,
}

#[derive(Debug, Deserialize)]
struct SearchConnection {
    #[serde(default)]
    edges: Vec<SearchEdge>,
}

#[derive(Debug, Deserialize)]
struct SearchEdge {
    node: Option<SearchNode>,
}

#[derive(Debug, Deserialize)]
struct SearchNode {
    post: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct TopicData {
    topic: Option<PostList>,
}

#[derive(Debug, Deserialize)]
struct OrganizationData {
    organization: Option<PostList>,
}

#[derive(Debug, Deserialize)]
struct PostList {
    #[serde(default)]
    posts: Vec<Value>,
}

/// Slab knowledge base reached over GraphQL.
#[derive(Debug, Clone)]
pub struct SlabClient {
    graphql: GraphQlClient,
    base_url: String,
}

impl SlabClient {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Ok(Self::with_executor(
            GraphQlClient::new(config)?,
            config.base_url.clone(),
        ))
    }

    pub fn with_executor(graphql: GraphQlClient, base_url: impl Into<String>) -> Self {
        Self {
            graphql,
            base_url: base_url.into(),
        }
    }

    fn to_posts<'a>(&self, records: impl IntoIterator<Item = &'a Value>) -> Vec<Post> {
        records
            .into_iter()
            .map(|record| post::from_record(record, &self.base_url))
            .collect()
    }
}

fn post_not_found(id: &str) -> SlabError {
    SlabError::api(None, format!("post {id} not found"))
}

#[async_trait]
impl KnowledgeBase for SlabClient {
    async fn get_post(&self, id: &str) -> Result<Post> {
        let data: PostData = self
            .graphql
            .execute(&get_post_query(), json!({ "id": id }))
            .await?;

        let record = data.post.ok_or_else(|| post_not_found(id))?;
        Ok(post::from_record(&record, &self.base_url))
    }

    async fn update_post(&self, id: &str, content: &str) -> Result<Post> {
        let current: PostData = self
            .graphql
            .execute(CURRENT_CONTENT_QUERY, json!({ "id": id }))
            .await?;
        let current = current.post.ok_or_else(|| post_not_found(id))?;

        let edit = delta::build_replacement(current.get("content"), content);
        let body = delta::normalize_body(content);

        let updated: UpdateData = self
            .graphql
            .execute(
                &update_content_mutation(),
                json!({ "id": id, "delta": edit }),
            )
            .await?;
        let record = updated
            .update_post_content
            .ok_or_else(|| post_not_found(id))?;

        info!(post_id = id, "post content replaced");

        let mut post = post::from_record(&record, &self.base_url);
        post.content = body;
        Ok(post)
    }

    async fn search_posts(&self, query: &str, limit: Option<u32>) -> Result<PostPage> {
        let first = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let data: SearchData = self
            .graphql
            .execute(&search_query(), json!({ "query": query, "first": first }))
            .await?;

        let search = data
            .search
            .ok_or_else(|| SlabError::api(None, "search returned no results object"))?;
        let records = search
            .edges
            .iter()
            .filter_map(|edge| edge.node.as_ref())
            .filter_map(|node| node.post.as_ref());

        Ok(PostPage::new(self.to_posts(records)))
    }

    async fn list_posts(&self, topic_id: Option<&str>) -> Result<PostPage> {
        let posts = match topic_id {
            Some(topic_id) => {
                let data: TopicData = self
                    .graphql
                    .execute(&topic_posts_query(), json!({ "id": topic_id }))
                    .await?;
                let topic = data
                    .topic
                    .ok_or_else(|| SlabError::api(None, format!("topic {topic_id} not found")))?;
                self.to_posts(&topic.posts)
            }
            None => {
                let data: OrganizationData = self
                    .graphql
                    .execute(&organization_posts_query(), json!({}))
                    .await?;
                let organization = data
                    .organization
                    .ok_or_else(|| SlabError::api(None, "organization not found"))?;
                self.to_posts(&organization.posts)
            }
        };

        Ok(PostPage::new(posts))
    }
}
