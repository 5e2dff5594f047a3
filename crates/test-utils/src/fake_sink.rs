use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use jsp_gantt::errors::Result;
use jsp_gantt::geometry::Figure;
use jsp_gantt::sink::RenderSink;

/// A sink that records every published figure and reported error.
#[derive(Debug, Clone, Default)]
pub struct FakeSink {
    published: Arc<Mutex<Vec<Arc<Figure>>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<Arc<Figure>> {
        self.published.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl RenderSink for FakeSink {
    fn publish(
        &mut self,
        figure: Arc<Figure>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let published = Arc::clone(&self.published);

        Box::pin(async move {
            published.lock().unwrap().push(figure);
            Ok(())
        })
    }

    fn report_error(&mut self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
