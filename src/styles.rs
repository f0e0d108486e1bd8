/// Stylesheet for the fixed controller page elements and the rotate prompts.
pub const CONTROLLER_STYLES: &str = "
                html, body {
                    margin: 0;
                    padding: 0;
                    width: 100%;
                    height: 100%;
                    overflow: hidden;
                    background: #222;
                    color: #eee;
                    font-family: sans-serif;
                    user-select: none;
                    -webkit-user-select: none;
                    touch-action: none;
                }

                .hft-fullsize {
                    position: absolute;
                    left: 0;
                    top: 0;
                    width: 100%;
                    height: 100%;
                }

                .hft-fullcenter {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }

                #hft-portrait, #hft-landscape {
                    z-index: 20;
                    background: rgba(0, 0, 0, 0.85);
                }

                /* Only prompt when the phone is actually held the wrong way */
                @media (orientation: landscape) {
                    #hft-portrait { display: none; }
                }

                @media (orientation: portrait) {
                    #hft-landscape { display: none; }
                }

                .hft-portrait-rot90 {
                    transform: rotate(90deg);
                }

                .hft-landscape-rot90 {
                    transform: rotate(-90deg);
                }

                .hft-instruction {
                    font-size: 2em;
                    font-weight: bold;
                }

                .hft-xlarge {
                    font-size: 6em;
                }

                #hft-menu {
                    position: absolute;
                    right: 10px;
                    top: 10px;
                    z-index: 30;
                    font-size: 2em;
                }

                #hft-touchstart {
                    z-index: 25;
                    display: none;
                    background: rgba(0, 0, 0, 0.6);
                }

                #hft-disconnected {
                    z-index: 40;
                    display: none;
                    background: #633;
                }

                #hft-debug {
                    display: none;
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    z-index: 50;
                    font-family: monospace;
                    font-size: 0.8em;
                    pointer-events: none;
                    background: rgba(0, 0, 0, 0.5);
                }
";
