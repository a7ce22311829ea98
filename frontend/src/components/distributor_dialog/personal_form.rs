//! 个人信息表单：姓名、联系方式和日期

use leptos::prelude::*;

use super::form_state::FormState;

#[component]
fn TextInput(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=input_type
                required=required
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
        </div>
    }
}

#[component]
pub fn PersonalForm(state: FormState) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-4">
            <TextInput id="nombres" label="Nombres" value=state.first_names required=true />
            <TextInput id="apellidos" label="Apellidos" value=state.last_names required=true />
        </div>
        <div class="grid grid-cols-2 gap-4">
            <TextInput id="telefono" label="Teléfono" value=state.phone input_type="tel" required=true />
            <TextInput id="email" label="Email" value=state.email input_type="email" />
        </div>
        <div class="grid grid-cols-2 gap-4">
            <TextInput id="fecha_ingreso" label="Fecha de ingreso" value=state.joined_on input_type="date" />
            <TextInput id="fecha_cumpleanos" label="Cumpleaños" value=state.birthday input_type="date" />
        </div>
        <TextInput id="lead_phone" label="Teléfono del lead" value=state.lead_phone input_type="tel" />
        <div class="form-control">
            <label for="notas" class="label">
                <span class="label-text">"Notas"</span>
            </label>
            <textarea
                id="notas"
                on:input=move |ev| state.notes.set(event_target_value(&ev))
                prop:value=move || state.notes.get()
                class="textarea textarea-bordered w-full"
            ></textarea>
        </div>
    }
}
