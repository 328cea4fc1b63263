use redis::{Commands, RedisResult};

const SNAPSHOT_KEY: &str = "insights:snapshot";

#[derive(Clone, Debug)]
pub struct InsightRepository {
    redis: redis::Client,
}

impl InsightRepository {
    pub fn new(redis: redis::Client) -> Self {
        Self { redis }
    }

    pub fn get(&self) -> anyhow::Result<Option<String>> {
        let mut con = self.redis.get_connection()?;

        let result: RedisResult<Option<String>> = con.get(SNAPSHOT_KEY);

        Ok(result?)
    }

    pub fn set(&self, snapshot: &str, ttl_secs: u64) -> anyhow::Result<()> {
        let mut con = self.redis.get_connection()?;

        let result: RedisResult<()> = con.set_ex(SNAPSHOT_KEY, snapshot, ttl_secs);

        Ok(result?)
    }
}
