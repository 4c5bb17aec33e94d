use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MatrixEggProps {
    pub on_dismiss: Callback<()>,
}

/// Full screen message shown after the secret sequence. Any click closes it.
#[function_component(MatrixEgg)]
pub fn matrix_egg(props: &MatrixEggProps) -> Html {
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="matrix-egg" onclick={onclick}>
            <style>
                {r#"
                    @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
                    .matrix-egg {
                        position: fixed; inset: 0; z-index: 10000;
                        background: #000;
                        display: flex; align-items: center; justify-content: center;
                        font-family: 'Fira Code', monospace;
                        font-size: 1.2rem;
                        color: #3FC97E;
                        flex-direction: column;
                        gap: 1rem;
                        cursor: pointer;
                        animation: fadeIn 0.4s ease;
                    }
                "#}
            </style>
            <div style="font-size: 4rem; margin-bottom: 1rem;">{"🐍"}</div>
            <div style="color: #FFD43B; font-size: 1.5rem; font-weight: 700;">
                {"$ sudo python3 -m antigravity"}
            </div>
            <div style="color: #5C6370; font-size: 0.85rem; margin-top: 0.5rem;">
                {"The Zen of Python:"}
            </div>
            <div style="color: #98C379; font-size: 0.78rem; text-align: center; max-width: 400px; line-height: 1.8;">
                {"Beautiful is better than ugly."}<br />
                {"Explicit is better than implicit."}<br />
                {"Simple is better than complex."}<br />
                <span style="color: #5C6370;">{"— Tim Peters"}</span>
            </div>
            <div style="color: #5C6370; font-size: 0.7rem; margin-top: 2rem;">
                {"(click to dismiss)"}
            </div>
        </div>
    }
}
