/// Namespaced JSON cache on top of Redis, with graceful degradation.
///
/// Every read returns `Option<T>` and every write returns `bool`. Redis failures are
/// logged as warnings and turn into misses, so callers always fall through to computing
/// the value themselves. A cache built without a URL never touches the network.
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::CommonError;

pub struct RedisCache {
    client: Option<redis::Client>,
    /// Prepended to every key, e.g. "seo:v1:"
    namespace: String,
}

impl RedisCache {
    /// Create a cache for `url`. A missing or unparseable URL yields a disabled cache.
    pub fn new(url: Option<&str>, namespace: &str) -> Self {
        let client = url.and_then(|u| {
            redis::Client::open(u)
                .inspect_err(|e| warn!(error = %e, url = u, "invalid redis url, cache disabled"))
                .ok()
        });
        Self {
            client,
            namespace: namespace.to_string(),
        }
    }

    pub fn disabled(namespace: &str) -> Self {
        Self::new(None, namespace)
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Round-trip a PING to the server.
    pub async fn ping(&self) -> Result<(), CommonError> {
        let client = self.client.as_ref().ok_or(CommonError::RedisDisabled)?;
        let mut conn = client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let key = self.key(key);
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn
            .get(&key)
            .await
            .inspect_err(|e| warn!(error = %e, key, "redis GET failed"))
            .ok()?;
        serde_json::from_str(&raw?)
            .inspect_err(|e| warn!(error = %e, key, "cache deserialization failed"))
            .ok()
    }

    /// Store `value` as JSON; `ttl_secs` of `None` keeps it until deleted.
    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T, ttl_secs: Option<u64>) -> bool {
        let key = self.key(key);
        let Ok(json) = serde_json::to_string(value)
            .inspect_err(|e| warn!(error = %e, key, "cache serialization failed"))
        else {
            return false;
        };
        let Some(mut conn) = self.connection().await else {
            return false;
        };
        let result = match ttl_secs {
            Some(ttl) => conn.set_ex::<_, _, ()>(&key, json, ttl).await,
            None => conn.set::<_, _, ()>(&key, json).await,
        };
        result
            .inspect_err(|e| warn!(error = %e, key, "redis SET failed"))
            .is_ok()
    }

    /// Delete every key in this cache's namespace, walking with SCAN rather than KEYS.
    pub async fn clear(&self) -> bool {
        let Some(mut conn) = self.connection().await else {
            return false;
        };

        let pattern = format!("{}*", self.namespace);
        let mut cursor: u64 = 0;
        loop {
            let scanned: Result<(u64, Vec<String>), _> = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await;
            let (next, keys) = match scanned {
                Ok(page) => page,
                Err(e) => {
                    warn!(error = %e, pattern, "redis SCAN failed");
                    return false;
                }
            };

            if !keys.is_empty() {
                if let Err(e) = conn.del::<_, ()>(&keys).await {
                    warn!(error = %e, "redis batch DEL failed during clear");
                    return false;
                }
            }

            cursor = next;
            if cursor == 0 {
                return true;
            }
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{key}", self.namespace)
    }

    async fn connection(&self) -> Option<MultiplexedConnection> {
        let client = self.client.as_ref()?;
        client
            .get_multiplexed_async_connection()
            .await
            .inspect_err(|e| warn!(error = %e, "redis connection failed"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_cache_degrades_to_misses() {
        let cache = RedisCache::disabled("test:v1:");
        assert!(!cache.is_enabled());
        assert!(matches!(cache.ping().await, Err(CommonError::RedisDisabled)));

        assert!(!cache.set_json("k", &vec![1, 2, 3], Some(60)).await);
        assert_eq!(cache.get_json::<Vec<i32>>("k").await, None);
        assert!(!cache.clear().await);
    }

    #[test]
    fn invalid_url_disables_cache() {
        let cache = RedisCache::new(Some("definitely not a url"), "test:v1:");
        assert!(!cache.is_enabled());
    }

    #[test]
    fn keys_are_namespaced() {
        let cache = RedisCache::disabled("seo:v1:");
        assert_eq!(cache.key("serp:abc"), "seo:v1:serp:abc");
    }
}
