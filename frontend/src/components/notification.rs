//! 全局通知（右上角 toast，3 秒后自动消失）

use distro_admin::ApiError;
use leptos::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    id: u64,
    pub message: String,
    pub is_error: bool,
}

#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    fn show(&self, message: String, is_error: bool) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.current.set(Some(Notice {
            id,
            message,
            is_error,
        }));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), false);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), true);
    }

    /// 展示请求失败原因
    ///
    /// 401 已经触发了全局登出，不再单独提示。
    pub fn api_error(&self, err: &ApiError, fallback: &str) {
        log::error!("{fallback}: {err}");
        if !err.is_unauthorized() {
            self.error(err.user_message(fallback));
        }
    }
}

pub fn provide_notifier() -> Notifier {
    let notifier = Notifier::new();
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[component]
pub fn NotificationToast() -> impl IntoView {
    let notifier = use_notifier();
    let current = notifier.current;

    // 只清除自己计时的那条，新通知会重新计时
    Effect::new(move |_| {
        if let Some(id) = current.with(|n| n.as_ref().map(|n| n.id)) {
            set_timeout(
                move || {
                    if current.with_untracked(|n| n.as_ref().map(|n| n.id)) == Some(id) {
                        current.set(None);
                    }
                },
                Duration::from_secs(3),
            );
        }
    });

    move || {
        current.get().map(|notice| {
            let class = if notice.is_error {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div class=class>
                        <span>{notice.message}</span>
                    </div>
                </div>
            }
        })
    }
}
