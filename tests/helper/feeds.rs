//! Release feed fixtures and a mock feed server

use mockito::{Mock, Server, ServerGuard};

/// Server feed in the published layout
pub const SERVER_FEED: &str = "\
Hazelcast IMDG Open Source releases

========== Current Stable
---
Version: 4.2.1
Date: 2021-06-11
Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.2.1
---
========== Previous Stable
---
Version: 4.2
Date: 2021-03-03
Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.2
---
Version: 4.1.3
Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.1.3/
---
Version: 4.1.1
Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.1.1
---
Version: 4.1-BETA-1
Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.1-BETA-1
---
Version: 4.0.3
Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.0.3
---
Version: 3.12.12.1
---
Version: 3.12.12
Github: https://github.com/hazelcast/hazelcast/releases/tag/v3.12.12
---
Version: 3.12.11
Github: https://github.com/hazelcast/hazelcast/releases/tag/v3.12.11
---
========== Development: SHOW
---
Version: 5.0-SNAPSHOT
Github: https://github.com/hazelcast/hazelcast/tree/master
---
";

/// Client feed with a section per client
pub const CLIENT_FEED: &str = "\
======= Java Client
---
Version: 4.2.1
Github: https://github.com/hazelcast/hazelcast/releases/tag/v4.2.1
---
=======

======= NodeJS Client
---
Version: 4.2.0
Github: https://github.com/hazelcast/hazelcast-nodejs-client/releases/tag/v4.2.0
---
Version: 4.1.0
Github: https://github.com/hazelcast/hazelcast-nodejs-client/releases/tag/v4.1.0
---
Version: 4.0.2
Github: https://github.com/hazelcast/hazelcast-nodejs-client/releases/tag/v4.0.2
---
Version: 4.0.1
Github: https://github.com/hazelcast/hazelcast-nodejs-client/releases/tag/v4.0.1
---
Version: 3.12.4
Github: https://github.com/hazelcast/hazelcast-nodejs-client/releases/tag/v3.12.4
---
=======

======= Go Client
---
Version: 1.0.0
Github: https://github.com/hazelcast/hazelcast-go-client/releases/tag/v1.0.0
---
Version: 1.0.0-preview.3
Github: https://github.com/hazelcast/hazelcast-go-client/releases/tag/v1.0.0-preview.3
---
=======
";

/// Serves `body` at `path` on a fresh mock server
pub async fn serve_feed(path: &str, body: &str) -> (ServerGuard, Mock) {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/plain; charset=utf-8")
        .with_body(body)
        .create_async()
        .await;

    (server, mock)
}
